//! Index decoding and per-document processing.

use crate::canonical::CanonicalDocument;
use crate::error::Result;
use crate::hash::hash_document;
use crate::symbols::extract_symbols;
use prost::Message;
use scipstore_api::{Document, Index, ProcessedDocument};
use std::iter::FusedIterator;
use tracing::{debug, info, warn};

/// Decode a serialized index and return a lazy stream over its documents.
///
/// Decoding happens up front: a malformed buffer fails here, before any
/// document is produced. Each document is processed only when the stream is
/// advanced.
pub fn correlate(bytes: &[u8]) -> Result<DocumentStream> {
    let index = Index::decode(bytes)?;
    info!(
        documents = index.documents.len(),
        bytes = bytes.len(),
        "decoded SCIP index"
    );
    Ok(DocumentStream::new(index))
}

/// Pull-based sequence of processed documents.
///
/// Dropping the stream discards the documents not yet processed.
pub struct DocumentStream {
    documents: std::vec::IntoIter<Document>,
    emitted: usize,
}

impl DocumentStream {
    pub fn new(index: Index) -> Self {
        Self {
            documents: index.documents.into_iter(),
            emitted: 0,
        }
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

impl Iterator for DocumentStream {
    type Item = ProcessedDocument;

    fn next(&mut self) -> Option<ProcessedDocument> {
        let document = self.documents.next()?;
        self.emitted += 1;
        Some(process_document(document))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.documents.size_hint()
    }
}

impl ExactSizeIterator for DocumentStream {}

impl FusedIterator for DocumentStream {}

/// Canonicalize, hash, extract symbols and re-encode one document.
///
/// Failures are recorded on the returned record rather than returned, so a
/// single bad document does not end the stream.
pub fn process_document(mut document: Document) -> ProcessedDocument {
    let path = std::mem::take(&mut document.relative_path);
    let canonical = CanonicalDocument::new(document);
    let hash = hash_document(&canonical);

    let mut processed = ProcessedDocument {
        path,
        hash,
        payload: Vec::new(),
        symbols: Vec::new(),
        err: None,
    };

    match extract_symbols(&canonical) {
        Ok(symbols) => processed.symbols = symbols,
        Err(e) => {
            warn!(path = %processed.path, "symbol extraction failed: {e}");
            processed.err = Some(e);
        }
    }

    let mut payload = Vec::with_capacity(canonical.encoded_len());
    match canonical.encode(&mut payload) {
        Ok(()) => processed.payload = payload,
        Err(e) => {
            warn!(path = %processed.path, "re-serialization failed: {e}");
            if processed.err.is_none() {
                processed.err = Some(e.into());
            }
        }
    }

    debug!(
        path = %processed.path,
        hash = %processed.hash,
        symbols = processed.symbols.len(),
        payload = processed.payload.len(),
        "processed document"
    );

    processed
}
