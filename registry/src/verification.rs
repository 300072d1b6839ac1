//! Verification engine — validates an authority's request to verify a
//! skill.
//!
//! Verification is one-way and restricted to the fixed trusted roster
//! (modeling institutions and employers). The permission gate runs before
//! any input validation.

use crate::account::AccountContext;
use crate::error::{RegistryError, ValidationError};
use skillchain_store::{SkillStore, StoreError};
use skillchain_types::SkillId;

pub struct VerifyEngine;

impl VerifyEngine {
    /// Validate a raw verification request. Returns the target skill id,
    /// ready to stage.
    pub fn validate<S, A>(
        &self,
        store: &S,
        accounts: &A,
        skill_id_raw: &str,
    ) -> Result<SkillId, RegistryError>
    where
        S: SkillStore,
        A: AccountContext,
    {
        let actor = accounts.current();
        if !accounts.is_trusted(&actor) {
            return Err(RegistryError::NotTrusted);
        }

        let skill_id_raw = skill_id_raw.trim();
        if skill_id_raw.is_empty() {
            return Err(ValidationError::MissingSkillId.into());
        }
        let id = SkillId::parse(skill_id_raw)
            .ok_or_else(|| ValidationError::InvalidSkillId(skill_id_raw.to_string()))?;

        let skill = match store.get(id) {
            Ok(skill) => skill,
            Err(StoreError::NotFound(id)) => return Err(RegistryError::NotFound(id)),
            Err(e) => return Err(e.into()),
        };
        if skill.verified {
            return Err(ValidationError::AlreadyVerified(id).into());
        }

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{RosterAccounts, RosterEntry};
    use skillchain_store::SkillDraft;
    use skillchain_store_memory::MemoryStore;
    use skillchain_types::{Identity, Timestamp};

    fn accounts(current: &str) -> RosterAccounts {
        let mut accounts = RosterAccounts::new(vec![
            RosterEntry {
                identity: Identity::new("Alice"),
                trusted: false,
            },
            RosterEntry {
                identity: Identity::new("Carol"),
                trusted: true,
            },
        ]);
        assert!(accounts.switch_to(current));
        accounts
    }

    fn store_with_skill() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .append(SkillDraft {
                metadata: "Rust".into(),
                owner: Identity::new("Alice"),
                minted_at: Timestamp::new(0),
            })
            .unwrap();
        store
    }

    #[test]
    fn untrusted_actor_rejected_before_input_checks() {
        let store = store_with_skill();
        let engine = VerifyEngine;
        // Even a blank id fails on permission first.
        let result = engine.validate(&store, &accounts("Alice"), "");
        assert!(matches!(result, Err(RegistryError::NotTrusted)));
    }

    #[test]
    fn trusted_actor_with_valid_id_passes() {
        let store = store_with_skill();
        let engine = VerifyEngine;
        let id = engine.validate(&store, &accounts("Carol"), " 0 ").unwrap();
        assert_eq!(id, SkillId::new(0));
    }

    #[test]
    fn blank_and_malformed_ids_rejected() {
        let store = store_with_skill();
        let engine = VerifyEngine;
        let carol = accounts("Carol");
        assert!(matches!(
            engine.validate(&store, &carol, "  "),
            Err(RegistryError::Validation(ValidationError::MissingSkillId))
        ));
        assert!(matches!(
            engine.validate(&store, &carol, "-1"),
            Err(RegistryError::Validation(ValidationError::InvalidSkillId(_)))
        ));
    }

    #[test]
    fn missing_skill_is_not_found() {
        let store = store_with_skill();
        let engine = VerifyEngine;
        let result = engine.validate(&store, &accounts("Carol"), "42");
        assert!(matches!(result, Err(RegistryError::NotFound(id)) if id == SkillId::new(42)));
    }

    #[test]
    fn already_verified_skill_rejected() {
        let store = store_with_skill();
        store
            .update(SkillId::new(0), |s| {
                s.verified = true;
                s.verified_by = Some(Identity::new("Dave"));
            })
            .unwrap();
        let engine = VerifyEngine;
        let result = engine.validate(&store, &accounts("Carol"), "0");
        assert!(matches!(
            result,
            Err(RegistryError::Validation(ValidationError::AlreadyVerified(id))) if id == SkillId::new(0)
        ));
    }
}
