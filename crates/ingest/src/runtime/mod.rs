//! Asynchronous hand-off between the correlator and its consumer.
//!
//! The synchronous [`DocumentStream`] runs on a blocking worker and pushes
//! each processed document into a bounded channel. The worker reserves a slot
//! before computing the next document, and stops as soon as the receiving
//! side is dropped.

use futures::Stream;
use scipstore_api::{CorrelateError, ProcessedDocument};
use scipstore_core::{CorrelateConfig, DocumentStream};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Consumer side of a running correlation.
pub struct DocumentReceiver {
    rx: mpsc::Receiver<ProcessedDocument>,
    worker: JoinHandle<usize>,
}

impl DocumentReceiver {
    /// Next processed document, or `None` once the index is exhausted.
    pub async fn recv(&mut self) -> Option<ProcessedDocument> {
        self.rx.recv().await
    }

    /// Stop consuming and wait for the worker to exit.
    ///
    /// Returns the number of documents the worker produced.
    pub async fn finish(self) -> Result<usize> {
        drop(self.rx);
        self.worker
            .await
            .map_err(|e| IngestError::Execution(format!("correlation worker join failure: {e}")))
    }

    pub fn into_stream(self) -> impl Stream<Item = ProcessedDocument> {
        futures::stream::unfold(self.rx, |mut rx| async move {
            rx.recv().await.map(|document| (document, rx))
        })
    }
}

/// Decode `bytes` and start producing processed documents.
///
/// A malformed index is reported here, before any document is sent.
pub async fn spawn_correlation(
    bytes: Vec<u8>,
    config: &CorrelateConfig,
) -> Result<DocumentReceiver> {
    let stream = tokio::task::spawn_blocking(move || scipstore_core::correlate(&bytes))
        .await
        .map_err(|e| IngestError::Execution(format!("decode task join failure: {e}")))??;

    let (tx, rx) = mpsc::channel(config.handoff_capacity());
    let handle = Handle::current();
    let worker = tokio::task::spawn_blocking(move || produce(handle, stream, tx));

    Ok(DocumentReceiver { rx, worker })
}

/// Read an index artifact to the end, then correlate it.
pub async fn correlate_reader<R>(
    mut reader: R,
    config: &CorrelateConfig,
) -> Result<DocumentReceiver>
where
    R: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .await
        .map_err(CorrelateError::from)?;
    spawn_correlation(bytes, config).await
}

/// Runs on a blocking thread. A channel slot is reserved before each document
/// is computed, so at most `capacity` documents exist ahead of the consumer.
fn produce(
    handle: Handle,
    mut stream: DocumentStream,
    tx: mpsc::Sender<ProcessedDocument>,
) -> usize {
    loop {
        let Ok(permit) = handle.block_on(tx.reserve()) else {
            debug!(emitted = stream.emitted(), "consumer gone, stopping correlation");
            break;
        };
        let Some(document) = stream.next() else {
            break;
        };
        permit.send(document);
    }
    stream.emitted()
}
