//! Skill ledger storage trait.

use crate::StoreError;
use skillchain_types::{EndorsementRecord, Identity, Skill, SkillId, Timestamp};
use serde::{Deserialize, Serialize};

/// Everything needed to append a skill; the store assigns the id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkillDraft {
    pub metadata: String,
    pub owner: Identity,
    pub minted_at: Timestamp,
}

/// Append-only ordered ledger of skill records.
///
/// Ids are assigned densely from 0 in append order and never reused;
/// records are mutated in place and never deleted, so iteration order
/// always equals ledger order.
pub trait SkillStore {
    /// Append a new skill, assigning `id = current count`. Returns the
    /// stored record.
    fn append(&self, draft: SkillDraft) -> Result<Skill, StoreError>;

    /// Retrieve one skill by id.
    fn get(&self, id: SkillId) -> Result<Skill, StoreError>;

    /// Apply a mutator to a skill in place, atomically. Returns the
    /// updated record.
    fn update<F>(&self, id: SkillId, mutate: F) -> Result<Skill, StoreError>
    where
        F: FnOnce(&mut Skill);

    /// The full ledger in insertion order.
    fn iter(&self) -> Result<Vec<Skill>, StoreError>;

    /// Number of skills on the ledger.
    fn count(&self) -> Result<u64, StoreError>;

    /// Record one applied endorsement in the ledger history.
    fn log_endorsement(&self, record: EndorsementRecord) -> Result<(), StoreError>;

    /// Endorsement history for one skill, in application order.
    /// Empty (not an error) for a skill with no endorsements.
    fn endorsements_for(&self, id: SkillId) -> Result<Vec<EndorsementRecord>, StoreError>;
}
