pub mod error;
pub mod logging;

pub mod canonical;
pub mod codec;
pub mod config;
pub mod correlate;
pub mod hash;
pub mod symbols;

pub use canonical::{CanonicalDocument, canonicalize_document};
pub use codec::{decode_ranges, encode_ranges};
pub use config::CorrelateConfig;
pub use correlate::{DocumentStream, correlate, process_document};
pub use error::Result;
pub use hash::hash_document;
pub use symbols::extract_symbols;
