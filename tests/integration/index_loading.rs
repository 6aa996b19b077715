//! Loading the index: once, whole, and never half-way.

use super::common::{fixture_bytes, payload, records, FIXTURE_INDEX};
use docsift::{BytesSource, FileSource, IndexSource, IndexStore, LoadError};
use std::sync::Arc;
use tokio::sync::Notify;

/// A source that holds its payload back until released.
struct GatedSource {
    gate: Arc<Notify>,
    bytes: Vec<u8>,
}

impl IndexSource for GatedSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        self.gate.notified().await;
        Ok(self.bytes.clone())
    }
}

/// A source whose fetch always fails.
struct BrokenSource;

impl IndexSource for BrokenSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        Err(LoadError::Source("connection reset".to_string()))
    }
}

#[tokio::test]
async fn test_load_fixture_from_disk() {
    let store = IndexStore::new();
    let count = store.load(&FileSource::new(FIXTURE_INDEX)).await.unwrap();
    assert_eq!(count, 13);
    assert_eq!(store.len(), 13);
    assert!(store.is_loaded());
}

#[tokio::test]
async fn test_missing_file_leaves_store_empty() {
    let store = IndexStore::new();
    let err = store
        .load(&FileSource::new("fixtures/does-not-exist.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("does-not-exist.json"));
    assert!(!store.is_loaded());
    assert!(store.results("print").is_empty());
}

#[tokio::test]
async fn test_source_failure_leaves_store_empty() {
    let store = IndexStore::new();
    let err = store.load(&BrokenSource).await.unwrap_err();
    assert_eq!(err.to_string(), "index source failed: connection reset");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_query_before_load_sees_nothing_then_sees_everything() {
    let store = IndexStore::new();
    let gate = Arc::new(Notify::new());
    let source = GatedSource {
        gate: gate.clone(),
        bytes: payload(&records(&["print", "sprint"])).into_bytes(),
    };

    let load = store.load(&source);
    let query_while_loading = async {
        // The load is parked on the gate; the store must still look empty.
        let before = store.results("print");
        let loaded_before = store.is_loaded();
        gate.notify_one();
        (before, loaded_before)
    };

    let (loaded, (before, loaded_before)) = tokio::join!(load, query_while_loading);

    assert_eq!(loaded.unwrap(), 2);
    assert!(before.is_empty());
    assert!(!loaded_before);
    assert_eq!(store.results("print").len(), 2);
}

#[tokio::test]
async fn test_index_is_populated_exactly_once() {
    let store = IndexStore::new();
    store.load(&BytesSource::new(fixture_bytes())).await.unwrap();

    let again = store.load(&BytesSource::new(payload(&records(&["other"])))).await;
    assert!(matches!(again, Err(LoadError::AlreadyLoaded)));
    assert_eq!(store.len(), 13);
    assert!(store.results("other").is_empty());
}

#[tokio::test]
async fn test_snapshot_taken_before_load_stays_empty() {
    let store = IndexStore::new();
    let snapshot = store.records();
    store.load(&BytesSource::new(fixture_bytes())).await.unwrap();
    assert!(snapshot.is_empty());
    assert_eq!(store.records().len(), 13);
}
