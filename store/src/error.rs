use skillchain_types::SkillId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("skill #{0} does not exist")]
    NotFound(SkillId),

    #[error("storage backend error: {0}")]
    Backend(String),
}
