//! In-memory skill ledger backend.
//!
//! All SkillChain state is process-lifetime only, so the in-memory store
//! is the production backend, not a test double. Thread-safe via interior
//! mutability to match the `&self` store-trait convention.

use skillchain_store::{SkillDraft, SkillStore, StoreError};
use skillchain_types::{EndorsementRecord, Skill, SkillId};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct LedgerInner {
    /// Skills indexed by id: `skills[n].id == n` always holds.
    skills: Vec<Skill>,
    /// Endorsement history per skill, in application order.
    endorsements: HashMap<SkillId, Vec<EndorsementRecord>>,
}

/// Mutex-guarded in-memory ledger.
pub struct MemoryStore {
    inner: Mutex<LedgerInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(LedgerInner::default()),
        }
    }

    fn locked(&self) -> Result<MutexGuard<'_, LedgerInner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("ledger lock poisoned".into()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillStore for MemoryStore {
    fn append(&self, draft: SkillDraft) -> Result<Skill, StoreError> {
        let mut inner = self.locked()?;
        let id = SkillId::new(inner.skills.len() as u64);
        let skill = Skill::minted(id, draft.metadata, draft.owner, draft.minted_at);
        inner.skills.push(skill.clone());
        Ok(skill)
    }

    fn get(&self, id: SkillId) -> Result<Skill, StoreError> {
        self.locked()?
            .skills
            .get(id.as_u64() as usize)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn update<F>(&self, id: SkillId, mutate: F) -> Result<Skill, StoreError>
    where
        F: FnOnce(&mut Skill),
    {
        let mut inner = self.locked()?;
        let skill = inner
            .skills
            .get_mut(id.as_u64() as usize)
            .ok_or(StoreError::NotFound(id))?;
        mutate(skill);
        Ok(skill.clone())
    }

    fn iter(&self) -> Result<Vec<Skill>, StoreError> {
        Ok(self.locked()?.skills.clone())
    }

    fn count(&self) -> Result<u64, StoreError> {
        Ok(self.locked()?.skills.len() as u64)
    }

    fn log_endorsement(&self, record: EndorsementRecord) -> Result<(), StoreError> {
        let mut inner = self.locked()?;
        if record.skill.as_u64() as usize >= inner.skills.len() {
            return Err(StoreError::NotFound(record.skill));
        }
        inner
            .endorsements
            .entry(record.skill)
            .or_default()
            .push(record);
        Ok(())
    }

    fn endorsements_for(&self, id: SkillId) -> Result<Vec<EndorsementRecord>, StoreError> {
        let inner = self.locked()?;
        if id.as_u64() as usize >= inner.skills.len() {
            return Err(StoreError::NotFound(id));
        }
        Ok(inner.endorsements.get(&id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillchain_types::{Identity, StakeAmount, Timestamp};

    fn draft(metadata: &str, owner: &str) -> SkillDraft {
        SkillDraft {
            metadata: metadata.into(),
            owner: Identity::new(owner),
            minted_at: Timestamp::new(0),
        }
    }

    #[test]
    fn append_assigns_dense_ids() {
        let store = MemoryStore::new();
        for n in 0..5u64 {
            let skill = store.append(draft(&format!("skill {n}"), "alice")).unwrap();
            assert_eq!(skill.id, SkillId::new(n));
        }
        assert_eq!(store.count().unwrap(), 5);
    }

    #[test]
    fn get_missing_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.get(SkillId::new(0)),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn update_mutates_in_place_and_returns_record() {
        let store = MemoryStore::new();
        let skill = store.append(draft("Rust", "alice")).unwrap();
        let updated = store
            .update(skill.id, |s| {
                s.endorsements += 1;
                s.score = s.score.saturating_add(StakeAmount::from_tokens(10));
            })
            .unwrap();
        assert_eq!(updated.endorsements, 1);
        assert_eq!(updated.score, StakeAmount::from_tokens(10));
        assert_eq!(store.get(skill.id).unwrap(), updated);
    }

    #[test]
    fn update_missing_is_not_found() {
        let store = MemoryStore::new();
        let result = store.update(SkillId::new(7), |_| {});
        assert!(matches!(result, Err(StoreError::NotFound(id)) if id == SkillId::new(7)));
    }

    #[test]
    fn iter_preserves_insertion_order() {
        let store = MemoryStore::new();
        store.append(draft("first", "alice")).unwrap();
        store.append(draft("second", "bob")).unwrap();
        store.append(draft("third", "alice")).unwrap();
        let all = store.iter().unwrap();
        let names: Vec<&str> = all.iter().map(|s| s.metadata.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn endorsement_history_per_skill() {
        let store = MemoryStore::new();
        let skill = store.append(draft("Rust", "alice")).unwrap();
        store.append(draft("Go", "alice")).unwrap();

        for (n, endorser) in ["bob", "carol"].iter().enumerate() {
            store
                .log_endorsement(EndorsementRecord {
                    skill: skill.id,
                    endorser: Identity::new(*endorser),
                    stake: StakeAmount::from_tokens(n as u128 + 1),
                    timestamp: Timestamp::new(n as u64),
                })
                .unwrap();
        }

        let history = store.endorsements_for(skill.id).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].endorser, Identity::new("bob"));
        assert_eq!(history[1].endorser, Identity::new("carol"));
        assert!(store.endorsements_for(SkillId::new(1)).unwrap().is_empty());
    }

    #[test]
    fn endorsement_history_for_missing_skill_is_not_found() {
        let store = MemoryStore::new();
        assert!(store.endorsements_for(SkillId::new(0)).is_err());
    }
}
