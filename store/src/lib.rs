//! Abstract storage traits for the SkillChain ledger.
//!
//! Every storage backend (in-memory today, anything durable tomorrow)
//! implements these traits. The rest of the codebase depends only on the
//! traits.

pub mod error;
pub mod skill;

pub use error::StoreError;
pub use skill::{SkillDraft, SkillStore};
