use scipstore_api::{DocumentStore, StoreStats};
use scipstore_core::CorrelateConfig;
use scipstore_ingest::{MemoryStore, WriteStats, correlate_reader, write_upload};
use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub path: String,
    pub hash: String,
    pub document_id: i64,
    pub payload_bytes: usize,
    pub symbols: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessReport {
    pub upload_id: i64,
    pub documents: Vec<DocumentReport>,
    pub written: WriteStats,
    pub store: StoreStats,
}

#[derive(Tabled)]
struct DocumentRow {
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Hash")]
    hash: String,
    #[tabled(rename = "Doc")]
    document_id: i64,
    #[tabled(rename = "Payload")]
    payload: String,
    #[tabled(rename = "Symbols")]
    symbols: usize,
}

#[derive(Tabled)]
struct FailureRow {
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Error")]
    error: String,
}

impl ProcessReport {
    pub fn render(&self) -> String {
        let rows: Vec<DocumentRow> = self
            .documents
            .iter()
            .map(|d| DocumentRow {
                path: d.path.clone(),
                hash: d.hash.chars().take(12).collect(),
                document_id: d.document_id,
                payload: format_size(d.payload_bytes),
                symbols: d.symbols,
            })
            .collect();

        let mut out = if rows.is_empty() {
            "No documents stored.".to_string()
        } else {
            Table::new(rows).to_string()
        };
        if !self.written.failures.is_empty() {
            let failures = self.written.failures.iter().map(|f| FailureRow {
                path: f.path.clone(),
                error: f.error.clone(),
            });
            out.push_str("\nFailed documents:\n");
            out.push_str(&Table::new(failures).to_string());
        }
        out.push_str(&format!(
            "\nUpload {}: {} written, {} skipped, {} symbol rows\nStore: {} documents, {} lookups, {} symbols",
            self.upload_id,
            self.written.documents,
            self.written.skipped,
            self.written.symbols,
            self.store.documents,
            self.store.lookups,
            self.store.symbols,
        ));
        out
    }
}

fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    }
}

pub async fn run(
    path: &Path,
    upload_id: i64,
    config: &CorrelateConfig,
) -> Result<ProcessReport, Box<dyn std::error::Error>> {
    info!("Processing index at: {}...", path.display());

    let file = tokio::fs::File::open(path).await?;
    let receiver = correlate_reader(file, config).await?;
    let store = MemoryStore::new(config.schema_version);
    let written = write_upload(&store, upload_id, receiver).await?;

    let documents = store
        .lookups_for_upload(upload_id)
        .into_iter()
        .filter_map(|lookup| {
            let document = store.document_by_id(lookup.document_id)?;
            Some(DocumentReport {
                path: lookup.path,
                hash: document.hash.to_string(),
                document_id: document.id,
                payload_bytes: document.payload.len(),
                symbols: store.symbols_for_lookup(lookup.id).len(),
            })
        })
        .collect();

    Ok(ProcessReport {
        upload_id,
        documents,
        written,
        store: store.stats().await?,
    })
}
