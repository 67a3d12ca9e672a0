pub mod error;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use error::{CorrelateError, CorrelateResult, StoreError, StoreResult};
pub use models::*;
pub use store::{DocumentStore, StoreStats};
