#[derive(Debug, thiserror::Error)]
pub enum CorrelateError {
    #[error("malformed index: {0}")]
    MalformedIndex(#[from] prost::DecodeError),
    #[error("invalid range length: {0}")]
    InvalidRangeLength(usize),
    #[error("malformed range buffer: {0}")]
    MalformedRanges(String),
    #[error("failed to re-serialize canonical document: {0}")]
    ReserializationFailed(#[from] prost::EncodeError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("unknown document lookup id: {0}")]
    UnknownLookup(i64),
}

pub type CorrelateResult<T> = std::result::Result<T, CorrelateError>;
pub type StoreResult<T> = std::result::Result<T, StoreError>;
