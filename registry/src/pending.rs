//! The staged-action slot shared by all three workflows.

use serde::{Deserialize, Serialize};
use skillchain_types::{SkillId, StakeAmount};
use std::fmt;

/// A validated request awaiting explicit confirmation or cancellation.
///
/// At most one pending action exists system-wide; it is created by a
/// workflow `request` and resolved by the matching `apply` or `cancel`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingAction {
    /// A mint preview: the metadata that will become an uneditable record.
    PreviewMint { metadata: String },
    /// A staked endorsement ready to apply.
    ConfirmEndorse { skill: SkillId, stake: StakeAmount },
    /// A verification ready to apply.
    ConfirmVerify { skill: SkillId },
}

impl PendingAction {
    pub fn kind(&self) -> PendingKind {
        match self {
            Self::PreviewMint { .. } => PendingKind::Mint,
            Self::ConfirmEndorse { .. } => PendingKind::Endorse,
            Self::ConfirmVerify { .. } => PendingKind::Verify,
        }
    }
}

/// Which workflow a pending action belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingKind {
    Mint,
    Endorse,
    Verify,
}

impl fmt::Display for PendingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Mint => "mint preview",
            Self::Endorse => "endorsement",
            Self::Verify => "verification",
        };
        write!(f, "{label}")
    }
}
