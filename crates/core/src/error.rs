pub use scipstore_api::CorrelateError;

pub type Result<T> = std::result::Result<T, CorrelateError>;
