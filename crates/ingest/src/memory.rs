//! In-process [`DocumentStore`] with the same dedup semantics a relational
//! backend is expected to provide.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use scipstore_api::{
    ContentHash, DocumentStore, ProcessedSymbolData, StoreError, StoreResult, StoreStats,
};
use std::sync::atomic::{AtomicI64, Ordering};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocument {
    pub id: i64,
    pub schema_version: i32,
    pub hash: ContentHash,
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLookup {
    pub id: i64,
    pub upload_id: i64,
    pub path: String,
    pub document_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSymbol {
    pub upload_id: i64,
    pub lookup_id: i64,
    pub schema_version: i32,
    pub data: ProcessedSymbolData,
}

type SymbolKey = (i64, String, i64);

pub struct MemoryStore {
    schema_version: i32,
    documents: DashMap<ContentHash, StoredDocument>,
    lookups: DashMap<i64, DocumentLookup>,
    symbols: DashMap<SymbolKey, StoredSymbol>,
    next_document_id: AtomicI64,
    next_lookup_id: AtomicI64,
}

impl MemoryStore {
    pub fn new(schema_version: i32) -> Self {
        Self {
            schema_version,
            documents: DashMap::new(),
            lookups: DashMap::new(),
            symbols: DashMap::new(),
            next_document_id: AtomicI64::new(1),
            next_lookup_id: AtomicI64::new(1),
        }
    }

    pub fn document(&self, hash: &ContentHash) -> Option<StoredDocument> {
        self.documents.get(hash).map(|d| d.clone())
    }

    pub fn document_by_id(&self, document_id: i64) -> Option<StoredDocument> {
        self.documents
            .iter()
            .find(|d| d.id == document_id)
            .map(|d| d.clone())
    }

    pub fn lookup(&self, lookup_id: i64) -> Option<DocumentLookup> {
        self.lookups.get(&lookup_id).map(|l| l.clone())
    }

    /// Lookup rows of one upload, ordered by id.
    pub fn lookups_for_upload(&self, upload_id: i64) -> Vec<DocumentLookup> {
        let mut lookups: Vec<DocumentLookup> = self
            .lookups
            .iter()
            .filter(|l| l.upload_id == upload_id)
            .map(|l| l.clone())
            .collect();
        lookups.sort_by_key(|l| l.id);
        lookups
    }

    /// Symbol rows of one lookup, ordered by symbol name.
    pub fn symbols_for_lookup(&self, lookup_id: i64) -> Vec<StoredSymbol> {
        let mut symbols: Vec<StoredSymbol> = self
            .symbols
            .iter()
            .filter(|s| s.lookup_id == lookup_id)
            .map(|s| s.clone())
            .collect();
        symbols.sort_by(|a, b| a.data.symbol_name.cmp(&b.data.symbol_name));
        symbols
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(1)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_document(
        &self,
        upload_id: i64,
        path: &str,
        hash: &ContentHash,
        payload: &[u8],
    ) -> StoreResult<i64> {
        let document_id = self
            .documents
            .entry(*hash)
            .or_insert_with(|| StoredDocument {
                id: self.next_document_id.fetch_add(1, Ordering::Relaxed),
                schema_version: self.schema_version,
                hash: *hash,
                payload: payload.to_vec(),
            })
            .id;

        let lookup_id = self.next_lookup_id.fetch_add(1, Ordering::Relaxed);
        self.lookups.insert(
            lookup_id,
            DocumentLookup {
                id: lookup_id,
                upload_id,
                path: path.to_string(),
                document_id,
            },
        );

        Ok(lookup_id)
    }

    async fn write_symbols(
        &self,
        upload_id: i64,
        lookup_id: i64,
        symbols: &[ProcessedSymbolData],
    ) -> StoreResult<u32> {
        if !self.lookups.contains_key(&lookup_id) {
            return Err(StoreError::UnknownLookup(lookup_id));
        }

        let mut inserted = 0;
        for symbol in symbols {
            let key = (upload_id, symbol.symbol_name.clone(), lookup_id);
            if let Entry::Vacant(entry) = self.symbols.entry(key) {
                entry.insert(StoredSymbol {
                    upload_id,
                    lookup_id,
                    schema_version: self.schema_version,
                    data: symbol.clone(),
                });
                inserted += 1;
            }
        }

        Ok(inserted)
    }

    async fn stats(&self) -> StoreResult<StoreStats> {
        Ok(StoreStats {
            documents: self.documents.len(),
            lookups: self.lookups.len(),
            symbols: self.symbols.len(),
        })
    }
}
