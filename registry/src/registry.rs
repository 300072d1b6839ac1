//! The skill registry — ties the three workflow engines to the ledger,
//! the pending-action slot, and the notice channel.
//!
//! Every operation is synchronous and runs to completion. A `request_*`
//! validates and stages; the matching `commit_*` applies against the
//! store; `cancel_*` discards the staged action. Errors and commit
//! outcomes all surface as notices.

use crate::account::AccountContext;
use crate::endorsement::EndorseEngine;
use crate::error::RegistryError;
use crate::mint::MintEngine;
use crate::pending::{PendingAction, PendingKind};
use crate::verification::VerifyEngine;
use skillchain_notify::Notifier;
use skillchain_store::{SkillStore, StoreError};
use skillchain_types::{EndorsementRecord, Identity, Skill, SkillId, Timestamp};

pub struct SkillRegistry<S, A> {
    store: S,
    accounts: A,
    notifier: Notifier,
    /// System-wide mutual-exclusion token: at most one staged action
    /// across all three workflows.
    pending: Option<PendingAction>,
    mint: MintEngine,
    endorse: EndorseEngine,
    verify: VerifyEngine,
}

impl<S, A> SkillRegistry<S, A>
where
    S: SkillStore,
    A: AccountContext,
{
    pub fn new(store: S, accounts: A) -> Self {
        Self {
            store,
            accounts,
            notifier: Notifier::new(),
            pending: None,
            mint: MintEngine,
            endorse: EndorseEngine,
            verify: VerifyEngine,
        }
    }

    // ── Mint ─────────────────────────────────────────────────────────────

    /// Validate metadata and stage a mint preview. A repeated mint request
    /// replaces its own preview; a staged action from another workflow
    /// fails `Busy`.
    pub fn request_mint(&mut self, metadata: &str) -> Result<(), RegistryError> {
        if let Err(e) = self.ensure_slot(PendingKind::Mint) {
            return Err(self.reject(e));
        }
        let metadata = match self.mint.validate(metadata) {
            Ok(m) => m,
            Err(e) => return Err(self.reject(e.into())),
        };
        self.pending = Some(PendingAction::PreviewMint { metadata });
        Ok(())
    }

    /// Append the previewed skill to the ledger.
    pub fn commit_mint(&mut self) -> Result<Skill, RegistryError> {
        let metadata = match self.pending.take() {
            Some(PendingAction::PreviewMint { metadata }) => metadata,
            other => {
                self.pending = other;
                return Err(self.reject(RegistryError::NoPendingAction(PendingKind::Mint)));
            }
        };

        let draft = self
            .mint
            .draft(metadata, self.accounts.current(), Timestamp::now());
        let skill = match self.store.append(draft) {
            Ok(skill) => skill,
            Err(e) => return Err(self.reject_store(e)),
        };

        tracing::info!("minted skill #{} for {}", skill.id, skill.owner);
        self.succeed(format!(r#"skill #{} "{}" minted"#, skill.id, skill.metadata));
        Ok(skill)
    }

    /// Discard the staged mint preview. No store mutation.
    pub fn cancel_mint(&mut self) -> Result<(), RegistryError> {
        self.cancel(PendingKind::Mint)
    }

    // ── Endorsement ──────────────────────────────────────────────────────

    /// Validate a staked endorsement and stage it. No mutation yet.
    pub fn request_endorse(
        &mut self,
        skill_id_raw: &str,
        stake_raw: &str,
    ) -> Result<(), RegistryError> {
        if let Err(e) = self.ensure_slot(PendingKind::Endorse) {
            return Err(self.reject(e));
        }
        let actor = self.accounts.current();
        let (skill, stake) =
            match self
                .endorse
                .validate(&self.store, &actor, skill_id_raw, stake_raw)
            {
                Ok(staged) => staged,
                Err(e) => return Err(self.reject(e)),
            };
        self.pending = Some(PendingAction::ConfirmEndorse { skill, stake });
        Ok(())
    }

    /// Apply the staged endorsement: `endorsements += 1`, `score += stake`
    /// as one atomic step, plus a history record.
    pub fn commit_endorse(&mut self) -> Result<Skill, RegistryError> {
        let (skill_id, stake) = match self.pending.take() {
            Some(PendingAction::ConfirmEndorse { skill, stake }) => (skill, stake),
            other => {
                self.pending = other;
                return Err(self.reject(RegistryError::NoPendingAction(PendingKind::Endorse)));
            }
        };

        let updated = match self.store.update(skill_id, |s| {
            s.endorsements = s.endorsements.saturating_add(1);
            s.score = s.score.saturating_add(stake);
        }) {
            Ok(skill) => skill,
            Err(e) => return Err(self.reject_store(e)),
        };
        if let Err(e) = self.store.log_endorsement(EndorsementRecord {
            skill: skill_id,
            endorser: self.accounts.current(),
            stake,
            timestamp: Timestamp::now(),
        }) {
            return Err(self.reject_store(e));
        }

        tracing::info!(
            "endorsed skill #{} with {} tokens (score now {})",
            updated.id,
            stake,
            updated.score
        );
        self.succeed(format!(
            r#"endorsed "{}" with {} tokens"#,
            updated.metadata, stake
        ));
        Ok(updated)
    }

    /// Discard the staged endorsement. No store mutation.
    pub fn cancel_endorse(&mut self) -> Result<(), RegistryError> {
        self.cancel(PendingKind::Endorse)
    }

    // ── Verification ─────────────────────────────────────────────────────

    /// Validate an authority verification and stage it.
    pub fn request_verify(&mut self, skill_id_raw: &str) -> Result<(), RegistryError> {
        if let Err(e) = self.ensure_slot(PendingKind::Verify) {
            return Err(self.reject(e));
        }
        let skill = match self
            .verify
            .validate(&self.store, &self.accounts, skill_id_raw)
        {
            Ok(id) => id,
            Err(e) => return Err(self.reject(e)),
        };
        self.pending = Some(PendingAction::ConfirmVerify { skill });
        Ok(())
    }

    /// Apply the staged verification: `verified` flips true, one-way.
    pub fn commit_verify(&mut self) -> Result<Skill, RegistryError> {
        let skill_id = match self.pending.take() {
            Some(PendingAction::ConfirmVerify { skill }) => skill,
            other => {
                self.pending = other;
                return Err(self.reject(RegistryError::NoPendingAction(PendingKind::Verify)));
            }
        };

        let authority = self.accounts.current();
        let updated = match self.store.update(skill_id, |s| {
            s.verified = true;
            s.verified_by = Some(authority.clone());
        }) {
            Ok(skill) => skill,
            Err(e) => return Err(self.reject_store(e)),
        };

        tracing::info!("verified skill #{} by {}", updated.id, authority);
        self.succeed(format!(
            r#"skill #{} "{}" verified"#,
            updated.id, updated.metadata
        ));
        Ok(updated)
    }

    /// Discard the staged verification. No store mutation.
    pub fn cancel_verify(&mut self) -> Result<(), RegistryError> {
        self.cancel(PendingKind::Verify)
    }

    // ── Read model ───────────────────────────────────────────────────────

    /// The full ordered ledger, optionally filtered by a case-insensitive
    /// substring match over metadata, owner, and id.
    pub fn skills(&self, filter: Option<&str>) -> Result<Vec<Skill>, RegistryError> {
        let mut all = self.store.iter()?;
        if let Some(query) = filter {
            let query = query.to_lowercase();
            all.retain(|s| matches_query(s, &query));
        }
        Ok(all)
    }

    /// Ledger records owned by the current identity, same filter semantics
    /// as [`SkillRegistry::skills`].
    pub fn my_skills(&self, filter: Option<&str>) -> Result<Vec<Skill>, RegistryError> {
        let me = self.accounts.current();
        let mut mine = self.skills(filter)?;
        mine.retain(|s| s.owner == me);
        Ok(mine)
    }

    /// One ledger record by id.
    pub fn skill(&self, id: SkillId) -> Result<Skill, RegistryError> {
        match self.store.get(id) {
            Ok(skill) => Ok(skill),
            Err(StoreError::NotFound(id)) => Err(RegistryError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Endorsement history for one skill, in application order.
    pub fn endorsement_history(
        &self,
        id: SkillId,
    ) -> Result<Vec<EndorsementRecord>, RegistryError> {
        match self.store.endorsements_for(id) {
            Ok(history) => Ok(history),
            Err(StoreError::NotFound(id)) => Err(RegistryError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    pub fn accounts(&self) -> &A {
        &self.accounts
    }

    pub fn accounts_mut(&mut self) -> &mut A {
        &mut self.accounts
    }

    pub fn current_identity(&self) -> Identity {
        self.accounts.current()
    }

    // ── Internals ────────────────────────────────────────────────────────

    /// A request may replace its own workflow's staged action but never
    /// another workflow's.
    fn ensure_slot(&self, kind: PendingKind) -> Result<(), RegistryError> {
        match &self.pending {
            Some(action) if action.kind() != kind => Err(RegistryError::Busy(action.kind())),
            _ => Ok(()),
        }
    }

    fn cancel(&mut self, kind: PendingKind) -> Result<(), RegistryError> {
        match self.pending.take() {
            Some(action) if action.kind() == kind => Ok(()),
            other => {
                self.pending = other;
                Err(self.reject(RegistryError::NoPendingAction(kind)))
            }
        }
    }

    fn reject(&mut self, err: RegistryError) -> RegistryError {
        self.notifier.error(err.to_string(), Timestamp::now());
        err
    }

    fn reject_store(&mut self, err: StoreError) -> RegistryError {
        let err = match err {
            StoreError::NotFound(id) => RegistryError::NotFound(id),
            other => RegistryError::Store(other),
        };
        self.reject(err)
    }

    fn succeed(&mut self, text: String) {
        self.notifier.success(text, Timestamp::now());
    }
}

fn matches_query(skill: &Skill, query: &str) -> bool {
    skill.metadata.to_lowercase().contains(query)
        || skill.owner.as_str().to_lowercase().contains(query)
        || skill.id.to_string().contains(query)
}
