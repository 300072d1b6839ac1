//! Workflow error taxonomy.
//!
//! Every variant is recoverable: the registry reports it through the
//! notice channel and waits for the actor to resubmit. Validation fully
//! precedes mutation in every workflow, so a failed operation never
//! leaves the ledger partially mutated.

use crate::pending::PendingKind;
use skillchain_store::StoreError;
use skillchain_types::SkillId;
use thiserror::Error;

/// Malformed or semantically invalid input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("skill description is empty")]
    EmptyMetadata,

    #[error("skill id is required")]
    MissingSkillId,

    #[error("stake amount is required")]
    MissingStake,

    #[error("invalid skill id: {0}")]
    InvalidSkillId(String),

    #[error("stake amount must be a number, not text or symbols")]
    NonNumericStake,

    #[error("stake amount must be a positive number")]
    NonPositiveStake,

    #[error("cannot endorse your own skill")]
    SelfEndorsement,

    #[error("skill #{0} is already verified")]
    AlreadyVerified(SkillId),
}

/// Everything a workflow operation can fail with.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("only trusted entities can verify skills")]
    NotTrusted,

    #[error("skill #{0} does not exist")]
    NotFound(SkillId),

    #[error("another action ({0}) is awaiting confirmation")]
    Busy(PendingKind),

    #[error("no pending {0} to resolve")]
    NoPendingAction(PendingKind),

    #[error(transparent)]
    Store(#[from] StoreError),
}
