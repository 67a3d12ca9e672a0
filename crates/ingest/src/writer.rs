use scipstore_api::DocumentStore;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::runtime::DocumentReceiver;

/// A document left out of the upload because it failed to process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDocument {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WriteStats {
    pub documents: usize,
    pub skipped: usize,
    pub symbols: u32,
    pub failures: Vec<SkippedDocument>,
}

/// Drain `documents` into `store` under `upload_id`.
///
/// Documents carrying a processing error are logged and skipped. A store
/// error stops the upload and cancels the remaining correlation work.
pub async fn write_upload<S>(
    store: &S,
    upload_id: i64,
    mut documents: DocumentReceiver,
) -> Result<WriteStats>
where
    S: DocumentStore + ?Sized,
{
    let mut stats = WriteStats::default();

    while let Some(document) = documents.recv().await {
        if let Some(err) = &document.err {
            warn!(upload_id, path = %document.path, "skipping document: {err}");
            stats.skipped += 1;
            stats.failures.push(SkippedDocument {
                path: document.path,
                error: err.to_string(),
            });
            continue;
        }

        let lookup_id = store
            .insert_document(upload_id, &document.path, &document.hash, &document.payload)
            .await?;
        stats.symbols += store
            .write_symbols(upload_id, lookup_id, &document.symbols)
            .await?;
        stats.documents += 1;
    }

    documents.finish().await?;

    info!(
        upload_id,
        documents = stats.documents,
        skipped = stats.skipped,
        symbols = stats.symbols,
        "upload written"
    );

    Ok(stats)
}
