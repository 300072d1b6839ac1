//! Endorsement engine — validates a staked endorsement request.
//!
//! Staking models proof-of-belief in another identity's credential.
//! Self-endorsement is disallowed so a credential holder cannot inflate
//! their own reputation. Validation runs strictly in order and fully
//! precedes any mutation.

use crate::error::{RegistryError, ValidationError};
use skillchain_store::{SkillStore, StoreError};
use skillchain_types::{Identity, SkillId, StakeAmount, StakeParseError};

pub struct EndorseEngine;

impl EndorseEngine {
    /// Validate a raw endorsement request against the ledger. Returns the
    /// target skill and parsed stake, ready to stage.
    pub fn validate<S: SkillStore>(
        &self,
        store: &S,
        actor: &Identity,
        skill_id_raw: &str,
        stake_raw: &str,
    ) -> Result<(SkillId, StakeAmount), RegistryError> {
        let skill_id_raw = skill_id_raw.trim();
        if skill_id_raw.is_empty() {
            return Err(ValidationError::MissingSkillId.into());
        }
        if stake_raw.trim().is_empty() {
            return Err(ValidationError::MissingStake.into());
        }

        let id = SkillId::parse(skill_id_raw)
            .ok_or_else(|| ValidationError::InvalidSkillId(skill_id_raw.to_string()))?;

        let stake = StakeAmount::parse(stake_raw).map_err(|e| match e {
            StakeParseError::NotANumber => ValidationError::NonNumericStake,
            StakeParseError::NotPositive => ValidationError::NonPositiveStake,
        })?;

        let skill = match store.get(id) {
            Ok(skill) => skill,
            Err(StoreError::NotFound(id)) => return Err(RegistryError::NotFound(id)),
            Err(e) => return Err(e.into()),
        };
        if skill.owner == *actor {
            return Err(ValidationError::SelfEndorsement.into());
        }

        Ok((id, stake))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillchain_store::SkillDraft;
    use skillchain_store_memory::MemoryStore;
    use skillchain_types::Timestamp;

    fn store_with_skill(owner: &str) -> MemoryStore {
        let store = MemoryStore::new();
        store
            .append(SkillDraft {
                metadata: "Python Programming".into(),
                owner: Identity::new(owner),
                minted_at: Timestamp::new(0),
            })
            .unwrap();
        store
    }

    fn expect_validation(result: Result<(SkillId, StakeAmount), RegistryError>) -> ValidationError {
        match result {
            Err(RegistryError::Validation(e)) => e,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_request_parses_id_and_stake() {
        let store = store_with_skill("alice");
        let engine = EndorseEngine;
        let (id, stake) = engine
            .validate(&store, &Identity::new("bob"), "0", "10.5")
            .unwrap();
        assert_eq!(id, SkillId::new(0));
        assert_eq!(stake, StakeAmount::parse("10.5").unwrap());
    }

    #[test]
    fn blank_fields_checked_in_order() {
        let store = store_with_skill("alice");
        let engine = EndorseEngine;
        let bob = Identity::new("bob");
        // Both blank: the skill id is reported first.
        assert_eq!(
            expect_validation(engine.validate(&store, &bob, "  ", "")),
            ValidationError::MissingSkillId
        );
        assert_eq!(
            expect_validation(engine.validate(&store, &bob, "0", "  ")),
            ValidationError::MissingStake
        );
    }

    #[test]
    fn malformed_id_rejected_before_stake() {
        let store = store_with_skill("alice");
        let engine = EndorseEngine;
        let result = engine.validate(&store, &Identity::new("bob"), "abc", "not-a-number");
        assert_eq!(
            expect_validation(result),
            ValidationError::InvalidSkillId("abc".into())
        );
    }

    #[test]
    fn stake_errors_stay_distinct() {
        let store = store_with_skill("alice");
        let engine = EndorseEngine;
        let bob = Identity::new("bob");
        assert_eq!(
            expect_validation(engine.validate(&store, &bob, "0", "ten")),
            ValidationError::NonNumericStake
        );
        assert_eq!(
            expect_validation(engine.validate(&store, &bob, "0", "-5")),
            ValidationError::NonPositiveStake
        );
        assert_eq!(
            expect_validation(engine.validate(&store, &bob, "0", "0")),
            ValidationError::NonPositiveStake
        );
    }

    #[test]
    fn missing_skill_is_not_found() {
        let store = store_with_skill("alice");
        let engine = EndorseEngine;
        let result = engine.validate(&store, &Identity::new("bob"), "999", "5");
        assert!(matches!(result, Err(RegistryError::NotFound(id)) if id == SkillId::new(999)));
    }

    #[test]
    fn self_endorsement_rejected_regardless_of_stake() {
        let store = store_with_skill("alice");
        let engine = EndorseEngine;
        let alice = Identity::new("alice");
        for stake in ["0.000001", "5", "1000000"] {
            assert_eq!(
                expect_validation(engine.validate(&store, &alice, "0", stake)),
                ValidationError::SelfEndorsement
            );
        }
    }
}
