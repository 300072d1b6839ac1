//! The skill record — a soulbound credential on the ledger.

use crate::identity::Identity;
use crate::stake::StakeAmount;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ledger index of a skill. Ids are dense from 0 in mint order and are
/// never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SkillId(u64);

impl SkillId {
    pub fn new(index: u64) -> Self {
        Self(index)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Parse a canonical non-negative decimal integer — no sign, no
    /// decimal point. Returns `None` for anything else.
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        text.parse::<u64>().ok().map(Self)
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A skill credential owned by one identity.
///
/// Skills are soulbound: they never transfer, and their metadata is fixed
/// at mint. Endorsements and verification mutate the record in place;
/// nothing ever deletes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Ledger index, assigned at commit.
    pub id: SkillId,
    /// Free-text description, trimmed and non-empty. Immutable after mint.
    pub metadata: String,
    /// The identity that minted the skill. Immutable.
    pub owner: Identity,
    /// One-way flag: false at mint, set true by an authority, never reverts.
    pub verified: bool,
    /// The authority that verified the skill. `Some` exactly when `verified`.
    pub verified_by: Option<Identity>,
    /// Number of endorsements applied.
    pub endorsements: u32,
    /// Accumulated stake across all endorsements.
    pub score: StakeAmount,
    /// Always true: skills are non-transferable by construction.
    pub soulbound: bool,
    /// When the skill was committed to the ledger.
    pub minted_at: Timestamp,
}

impl Skill {
    /// A freshly minted, unverified skill.
    pub fn minted(id: SkillId, metadata: String, owner: Identity, minted_at: Timestamp) -> Self {
        Self {
            id,
            metadata,
            owner,
            verified: false,
            verified_by: None,
            endorsements: 0,
            score: StakeAmount::ZERO,
            soulbound: true,
            minted_at,
        }
    }
}

/// One applied endorsement, kept as ledger history alongside the
/// per-skill counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndorsementRecord {
    pub skill: SkillId,
    pub endorser: Identity,
    pub stake: StakeAmount,
    pub timestamp: Timestamp,
}
