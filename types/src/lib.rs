//! Fundamental types for the SkillChain ledger.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: identities, skill ids, stake amounts, timestamps, and the
//! skill record itself.

pub mod identity;
pub mod skill;
pub mod stake;
pub mod time;

pub use identity::Identity;
pub use skill::{EndorsementRecord, Skill, SkillId};
pub use stake::{StakeAmount, StakeParseError, STAKE_UNIT};
pub use time::Timestamp;
