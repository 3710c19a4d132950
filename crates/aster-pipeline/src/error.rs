use aster_core::{AccountId, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Missing source account: skeleton envelope requires a source override")]
    MissingSourceAccount,

    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Account-state provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Body mismatch: envelope at index {index} differs from the base")]
    BodyMismatch { index: usize },

    #[error("Collation requires at least one envelope")]
    EmptyCollation,

    #[error(transparent)]
    Core(#[from] CoreError),
}
