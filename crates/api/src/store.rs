use crate::StoreResult;
use crate::models::{ContentHash, ProcessedSymbolData};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Row counts held by a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub documents: usize,
    pub lookups: usize,
    pub symbols: usize,
}

/// Persistence collaborator for correlated documents.
///
/// Implementations own transactions and batching. The correlator only
/// relies on the dedup and insert-or-skip semantics documented per method.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert the shared document keyed by `hash` unless it already exists,
    /// then link it to `upload_id` under the original `path`.
    ///
    /// Returns the id of the new lookup row.
    async fn insert_document(
        &self,
        upload_id: i64,
        path: &str,
        hash: &ContentHash,
        payload: &[u8],
    ) -> StoreResult<i64>;

    /// Bulk insert symbol rows for one document lookup.
    ///
    /// Rows whose `(upload_id, symbol_name, lookup_id)` already exist are
    /// skipped without error. Returns the number of rows actually inserted.
    async fn write_symbols(
        &self,
        upload_id: i64,
        lookup_id: i64,
        symbols: &[ProcessedSymbolData],
    ) -> StoreResult<u32>;

    async fn stats(&self) -> StoreResult<StoreStats>;
}
