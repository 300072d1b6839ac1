//! Mint engine — validates skill metadata before a preview is staged and
//! builds the draft that the commit appends.
//!
//! Minting is irreversible and metadata is permanently fixed once
//! committed, which is why the workflow forces a preview step before the
//! record exists.

use crate::error::ValidationError;
use skillchain_store::SkillDraft;
use skillchain_types::{Identity, Timestamp};

pub struct MintEngine;

impl MintEngine {
    /// Validate raw metadata for a mint preview. Returns the trimmed text
    /// that will be fixed into the record at commit.
    pub fn validate(&self, metadata: &str) -> Result<String, ValidationError> {
        let trimmed = metadata.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyMetadata);
        }
        Ok(trimmed.to_string())
    }

    /// Build the draft a confirmed preview turns into.
    pub fn draft(&self, metadata: String, owner: Identity, now: Timestamp) -> SkillDraft {
        SkillDraft {
            metadata,
            owner,
            minted_at: now,
        }
    }
}
