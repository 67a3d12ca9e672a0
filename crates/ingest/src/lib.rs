pub mod error;
pub mod memory;
pub mod runtime;
pub mod writer;

pub use error::{IngestError, Result};
pub use memory::{DocumentLookup, MemoryStore, StoredDocument, StoredSymbol};
pub use runtime::{DocumentReceiver, correlate_reader, spawn_correlation};
pub use writer::{SkippedDocument, WriteStats, write_upload};
