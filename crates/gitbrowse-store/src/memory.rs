// GitBrowse - Literate Browsing for Git Objects
// Copyright (C) 2025 GitBrowse Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.

//! In-memory document store
//!
//! Serves documents from a `HashMap` and records every id it is asked for, so
//! tests can assert on the exact fetch sequence. Also loads offline fixtures
//! from JSON files.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gitbrowse_store::{MemoryStore, ObjectFetcher, ObjectId};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = MemoryStore::from_json_str(r#"{"git-branches": {"branches": []}}"#)?;
//!
//!     store.fetch(&ObjectId::branch_index()).await?;
//!     assert_eq!(store.fetch_log().await, vec![ObjectId::branch_index()]);
//!     Ok(())
//! }
//! ```

use crate::{ObjectFetcher, ObjectId, StoreError, StoreResult};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

/// In-memory document store
///
/// Cloning is cheap and clones share the same documents and fetch log.
#[derive(Clone, Default)]
pub struct MemoryStore {
    documents: Arc<RwLock<HashMap<ObjectId, Value>>>,
    fetch_log: Arc<Mutex<Vec<ObjectId>>>,
    fetch_delay: Option<Duration>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with initial documents
    pub fn with_documents(documents: HashMap<ObjectId, Value>) -> Self {
        Self {
            documents: Arc::new(RwLock::new(documents)),
            ..Self::default()
        }
    }

    /// Delay every fetch by `delay`, simulating a slow transport
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = Some(delay);
        self
    }

    /// Parse documents from JSON
    ///
    /// Accepts either an object mapping ids to documents, or an array of
    /// documents that each carry an `_id`.
    ///
    /// # Errors
    ///
    /// Fails on invalid JSON, on a top-level value that is neither an object
    /// nor an array, or on an array element without a string `_id`.
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        let documents = match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(id, doc)| (ObjectId::new(id), doc))
                .collect(),
            Value::Array(docs) => {
                let mut documents = HashMap::with_capacity(docs.len());
                for (index, doc) in docs.into_iter().enumerate() {
                    let id = doc
                        .get("_id")
                        .and_then(Value::as_str)
                        .ok_or_else(|| {
                            StoreError::invalid_document(
                                format!("#{}", index),
                                "fixture document without a string `_id`",
                            )
                        })?
                        .to_string();
                    documents.insert(ObjectId::new(id), doc);
                }
                documents
            }
            _ => {
                return Err(StoreError::invalid_document(
                    "<fixture>",
                    "expected an object or an array of documents",
                ))
            }
        };
        Ok(Self::with_documents(documents))
    }

    /// Load documents from a JSON fixture file
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or does not parse (see
    /// [`from_json_str`](Self::from_json_str)).
    pub async fn from_json_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let store = Self::from_json_str(&content)?;
        debug!(path = %path.display(), documents = store.len().await, "Loaded fixture store");
        Ok(store)
    }

    /// Insert or replace a document
    pub async fn insert(&self, id: ObjectId, document: Value) {
        self.documents.write().await.insert(id, document);
    }

    /// Serialize and insert a typed document
    ///
    /// # Errors
    ///
    /// Fails if `document` cannot be represented as JSON.
    pub async fn insert_document<T: Serialize>(&self, id: ObjectId, document: &T) -> StoreResult<()> {
        let value = serde_json::to_value(document)?;
        self.insert(id, value).await;
        Ok(())
    }

    /// Remove a document
    pub async fn remove(&self, id: &ObjectId) -> Option<Value> {
        self.documents.write().await.remove(id)
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Whether the store holds no documents
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    /// All stored documents as an id → document JSON object
    pub async fn to_json(&self) -> Value {
        let documents = self.documents.read().await;
        let mut ids: Vec<&ObjectId> = documents.keys().collect();
        ids.sort();
        Value::Object(
            ids.into_iter()
                .map(|id| (id.to_string(), documents[id].clone()))
                .collect(),
        )
    }

    /// Ids requested so far, in request order
    pub async fn fetch_log(&self) -> Vec<ObjectId> {
        self.fetch_log.lock().await.clone()
    }

    /// Number of fetches issued so far
    pub async fn fetch_count(&self) -> usize {
        self.fetch_log.lock().await.len()
    }

    /// Forget recorded fetches
    pub async fn clear_fetch_log(&self) {
        self.fetch_log.lock().await.clear();
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("documents", &"<in-memory>")
            .field("fetch_delay", &self.fetch_delay)
            .finish()
    }
}

#[async_trait]
impl ObjectFetcher for MemoryStore {
    async fn fetch(&self, id: &ObjectId) -> StoreResult<Value> {
        self.fetch_log.lock().await.push(id.clone());

        if let Some(delay) = self.fetch_delay {
            tokio::time::sleep(delay).await;
        }

        self.documents
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Blob;
    use serde_json::json;

    #[tokio::test]
    async fn test_insert_and_fetch() {
        let store = MemoryStore::new();
        assert!(store.is_empty().await);

        let id = ObjectId::new("doc");
        store.insert(id.clone(), json!({"a": 1})).await;
        assert_eq!(store.len().await, 1);
        assert_eq!(store.fetch(&id).await.unwrap(), json!({"a": 1}));
    }

    #[tokio::test]
    async fn test_missing_document() {
        let store = MemoryStore::new();
        let err = store.fetch(&ObjectId::new("nope")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_fetch_log_records_order() {
        let store = MemoryStore::new();
        store.insert(ObjectId::new("a"), json!({})).await;

        store.fetch(&ObjectId::new("a")).await.unwrap();
        let _ = store.fetch(&ObjectId::new("b")).await;
        store.fetch(&ObjectId::new("a")).await.unwrap();

        assert_eq!(
            store.fetch_log().await,
            vec![ObjectId::new("a"), ObjectId::new("b"), ObjectId::new("a")]
        );
        assert_eq!(store.fetch_count().await, 3);

        store.clear_fetch_log().await;
        assert_eq!(store.fetch_count().await, 0);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryStore::new();
        let clone = store.clone();
        clone.insert(ObjectId::new("x"), json!(1)).await;
        assert_eq!(store.fetch(&ObjectId::new("x")).await.unwrap(), json!(1));
        assert_eq!(clone.fetch_count().await, 1);
    }

    #[tokio::test]
    async fn test_insert_typed_document() {
        let store = MemoryStore::new();
        let id = ObjectId::for_object("b1");
        store
            .insert_document(id.clone(), &Blob::raw("b1", "text"))
            .await
            .unwrap();
        assert_eq!(
            store.fetch(&id).await.unwrap(),
            json!({"sha": "b1", "encoding": "raw", "raw": "text"})
        );
    }

    #[tokio::test]
    async fn test_from_json_object_and_array() {
        let store = MemoryStore::from_json_str(r#"{"a": {"x": 1}, "b": {"x": 2}}"#).unwrap();
        assert_eq!(store.len().await, 2);

        let store =
            MemoryStore::from_json_str(r#"[{"_id": "a", "x": 1}, {"_id": "b", "x": 2}]"#).unwrap();
        assert_eq!(
            store.fetch(&ObjectId::new("b")).await.unwrap(),
            json!({"_id": "b", "x": 2})
        );

        assert!(MemoryStore::from_json_str(r#"[{"x": 1}]"#).is_err());
        assert!(MemoryStore::from_json_str("42").is_err());
        assert!(MemoryStore::from_json_str("{").is_err());
    }

    #[tokio::test]
    async fn test_to_json_round_trip() {
        let store = MemoryStore::from_json_str(r#"{"b": {"x": 2}, "a": {"x": 1}}"#).unwrap();
        let dumped = store.to_json().await;
        let reloaded = MemoryStore::from_json_str(&dumped.to_string()).unwrap();
        assert_eq!(reloaded.to_json().await, dumped);
    }

    #[tokio::test]
    async fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.json");
        std::fs::write(&path, r#"{"git-branches": {"branches": []}}"#).unwrap();

        let store = MemoryStore::from_json_file(&path).await.unwrap();
        assert_eq!(store.len().await, 1);

        let missing = MemoryStore::from_json_file(dir.path().join("missing.json")).await;
        assert!(matches!(missing, Err(StoreError::Io(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_delay() {
        let store = MemoryStore::new().with_fetch_delay(Duration::from_secs(5));
        store.insert(ObjectId::new("a"), json!(1)).await;

        let started = tokio::time::Instant::now();
        store.fetch(&ObjectId::new("a")).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(5));
    }
}
