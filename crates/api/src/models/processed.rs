use super::util::{serde_hex_digest, to_hex};
use crate::error::CorrelateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// SHA-256 digest of a canonical document. Used as the deduplication key.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ContentHash(#[serde(with = "serde_hex_digest")] pub [u8; 32]);

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_hex(&self.0))
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({self})")
    }
}

/// Encoded range sets for one symbol within one document.
///
/// Each buffer is the delta-varint encoding of a flat range list, or `None`
/// when the symbol has no ranges in that category.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessedSymbolData {
    pub symbol_name: String,
    #[serde(with = "serde_bytes")]
    pub definition_ranges: Option<Vec<u8>>,
    #[serde(with = "serde_bytes")]
    pub reference_ranges: Option<Vec<u8>>,
    #[serde(with = "serde_bytes")]
    pub implementation_ranges: Option<Vec<u8>>,
    #[serde(with = "serde_bytes")]
    pub type_definition_ranges: Option<Vec<u8>>,
}

/// One correlated document, ready to hand to a [`crate::DocumentStore`].
#[derive(Debug)]
pub struct ProcessedDocument {
    /// Original relative path, as it appeared in the index.
    pub path: String,
    pub hash: ContentHash,
    /// Canonical, path-free document re-encoded in the wire format.
    pub payload: Vec<u8>,
    pub symbols: Vec<ProcessedSymbolData>,
    pub err: Option<CorrelateError>,
}

impl ProcessedDocument {
    pub fn is_ok(&self) -> bool {
        self.err.is_none()
    }
}
