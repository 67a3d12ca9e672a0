use futures::StreamExt;
use prost::Message;
use scipstore_api::{CorrelateError, Document, Index, Occurrence, SymbolInformation};
use scipstore_core::CorrelateConfig;
use scipstore_ingest::{
    IngestError, MemoryStore, correlate_reader, spawn_correlation, write_upload,
};

fn document(path: &str, symbol: &str, line: i32) -> Document {
    Document {
        relative_path: path.to_string(),
        occurrences: vec![
            Occurrence {
                range: vec![line, 0, 5],
                symbol: symbol.to_string(),
                symbol_roles: 1,
                ..Default::default()
            },
            Occurrence {
                range: vec![line + 3, 2, 7],
                symbol: symbol.to_string(),
                ..Default::default()
            },
        ],
        symbols: vec![SymbolInformation {
            symbol: symbol.to_string(),
            documentation: vec![format!("docs for {symbol}")],
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn index_bytes(documents: Vec<Document>) -> Vec<u8> {
    Index {
        documents,
        ..Default::default()
    }
    .encode_to_vec()
}

#[tokio::test]
async fn test_documents_arrive_in_index_order() {
    let bytes = index_bytes(vec![
        document("c.go", "c", 1),
        document("a.go", "a", 2),
        document("b.go", "b", 3),
    ]);

    let mut receiver = spawn_correlation(bytes, &CorrelateConfig::default())
        .await
        .unwrap();
    let mut paths = Vec::new();
    while let Some(document) = receiver.recv().await {
        assert!(document.is_ok());
        paths.push(document.path);
    }
    assert_eq!(paths, vec!["c.go", "a.go", "b.go"]);
    assert_eq!(receiver.finish().await.unwrap(), 3);
}

#[tokio::test]
async fn test_malformed_index_fails_before_any_document() {
    let result: scipstore_ingest::Result<_> =
        spawn_correlation(vec![0x0a, 0x05, 0x01], &CorrelateConfig::default()).await;
    assert!(matches!(
        result,
        Err(IngestError::Correlate(CorrelateError::MalformedIndex(_)))
    ));
}

fn numbered_index(count: i32) -> Vec<u8> {
    index_bytes(
        (0..count)
            .map(|i| document(&format!("f{i}.go"), &format!("s{i}"), i))
            .collect(),
    )
}

#[tokio::test]
async fn test_dropping_consumer_stops_producer() {
    let config = CorrelateConfig::default();

    let mut receiver = spawn_correlation(numbered_index(50), &config)
        .await
        .unwrap();
    let first = receiver.recv().await.unwrap();
    assert_eq!(first.path, "f0.go");

    let produced = receiver.finish().await.unwrap();
    // the consumed document plus whatever fills the free slots
    assert!(produced <= 1 + config.handoff_capacity(), "produced {produced}");
}

#[tokio::test]
async fn test_idle_consumer_holds_producer_at_capacity() {
    for capacity in [1, 3] {
        let config = CorrelateConfig::default().with_handoff_capacity(capacity);
        let receiver = spawn_correlation(numbered_index(10), &config)
            .await
            .unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        let produced = receiver.finish().await.unwrap();
        assert!(
            produced <= capacity,
            "capacity {capacity}, produced {produced} with nothing consumed"
        );
    }
}

#[tokio::test]
async fn test_upload_dedups_shared_documents() {
    let bytes = index_bytes(vec![
        document("a.go", "a", 1),
        document("b.go", "b", 1),
        document("copy_of_a.go", "a", 1),
    ]);
    let store = MemoryStore::default();
    let config = CorrelateConfig::default();

    let receiver = spawn_correlation(bytes.clone(), &config).await.unwrap();
    let stats = write_upload(&store, 10, receiver).await.unwrap();
    assert_eq!(stats.documents, 3);
    assert_eq!(stats.skipped, 0);
    assert_eq!(stats.symbols, 3);

    let receiver = spawn_correlation(bytes, &config).await.unwrap();
    write_upload(&store, 11, receiver).await.unwrap();

    let stats = scipstore_api::DocumentStore::stats(&store).await.unwrap();
    assert_eq!(stats.documents, 2);
    assert_eq!(stats.lookups, 6);
    assert_eq!(stats.symbols, 6);

    let first = store.lookups_for_upload(10);
    let second = store.lookups_for_upload(11);
    let paths: Vec<&str> = first.iter().map(|l| l.path.as_str()).collect();
    assert_eq!(paths, vec!["a.go", "b.go", "copy_of_a.go"]);
    assert_eq!(first[0].document_id, first[2].document_id);
    assert_ne!(first[0].document_id, first[1].document_id);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.document_id, b.document_id);
    }
}

#[tokio::test]
async fn test_failed_documents_are_skipped() {
    let mut bad = document("bad.go", "x", 1);
    bad.occurrences[0].range = vec![1, 2];
    let bytes = index_bytes(vec![document("good.go", "g", 1), bad]);

    let store = MemoryStore::default();
    let receiver = spawn_correlation(bytes, &CorrelateConfig::default())
        .await
        .unwrap();
    let stats = write_upload(&store, 1, receiver).await.unwrap();

    assert_eq!(stats.documents, 1);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.failures.len(), 1);
    assert_eq!(stats.failures[0].path, "bad.go");
    assert_eq!(stats.failures[0].error, "invalid range length: 2");
    let lookups = store.lookups_for_upload(1);
    assert_eq!(lookups.len(), 1);
    assert_eq!(lookups[0].path, "good.go");
}

#[tokio::test]
async fn test_reader_and_stream() {
    let bytes = index_bytes(vec![document("a.go", "a", 1), document("b.go", "b", 1)]);
    let config = CorrelateConfig::default().with_handoff_capacity(4);

    let receiver = correlate_reader(bytes.as_slice(), &config).await.unwrap();
    let documents: Vec<_> = receiver.into_stream().collect().await;
    assert_eq!(documents.len(), 2);
    assert_ne!(documents[0].hash, documents[1].hash);
}
