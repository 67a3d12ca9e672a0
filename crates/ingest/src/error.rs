use scipstore_api::{CorrelateError, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("correlation failed: {0}")]
    Correlate(#[from] CorrelateError),
    #[error("storage failed: {0}")]
    Store(#[from] StoreError),
    #[error("execution failed: {0}")]
    Execution(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;
