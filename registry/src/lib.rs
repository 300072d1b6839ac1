//! SkillChain workflow engines.
//!
//! Three workflows mutate the skill ledger, each split into an explicit
//! request/apply pair so nothing irreversible happens without
//! confirmation:
//!
//! - **Mint** — two-phase creation of a soulbound skill record.
//! - **Endorsement** — staked peer endorsement with self-endorsement
//!   prevention.
//! - **Verification** — one-way, authority-gated validation.
//!
//! A `request` validates input and stages a [`PendingAction`]; the single
//! pending slot is a system-wide mutual-exclusion token, so no two
//! workflows can hold unapplied actions at once. [`SkillRegistry`] owns
//! the slot, resolves applies against the store, and reports every
//! outcome through the notice channel.

pub mod account;
pub mod endorsement;
pub mod error;
pub mod mint;
pub mod pending;
pub mod registry;
pub mod verification;

pub use account::{AccountContext, RosterAccounts, RosterEntry};
pub use error::{RegistryError, ValidationError};
pub use pending::{PendingAction, PendingKind};
pub use registry::SkillRegistry;
