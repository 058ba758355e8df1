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

//! Git objects held in a JSON document store
//!
//! A git repository is mirrored into a document database (CouchDB) as one JSON
//! document per object. This crate provides:
//!
//! - Typed documents: [`BranchIndex`], [`Branch`], [`Commit`], [`Tree`], [`Blob`]
//! - The [`ObjectFetcher`] capability: asynchronous `GET` by document id
//! - [`MemoryStore`]: an in-memory fetcher for tests and offline fixtures
//! - [`CouchStore`]: a fetcher over the CouchDB HTTP API
//!
//! # Examples
//!
//! ```no_run
//! use gitbrowse_store::{MemoryStore, ObjectFetcher, ObjectId};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = MemoryStore::new();
//!     store
//!         .insert(ObjectId::branch_index(), json!({"branches": []}))
//!         .await;
//!
//!     let doc = store.fetch(&ObjectId::branch_index()).await?;
//!     assert_eq!(doc, json!({"branches": []}));
//!     Ok(())
//! }
//! ```

pub mod blob;
pub mod branch;
pub mod commit;
pub mod couch;
pub mod document;
pub mod error;
pub mod id;
pub mod memory;
pub mod tree;

use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;
use std::sync::Arc;

pub use blob::{Blob, BlobContent, BlobEncoding};
pub use branch::{Branch, BranchEntry, BranchIndex};
pub use commit::{Commit, Signature};
pub use couch::CouchStore;
pub use document::{parse_document, AnyObject, DocumentKind, ObjectRef, TreeOrBlob};
pub use error::{StoreError, StoreResult};
pub use id::{ObjectId, BRANCH_INDEX_ID};
pub use memory::MemoryStore;
pub use tree::{Tree, TreeEntry};

/// Capability to fetch one document by id
///
/// Implementations own transport concerns: timeouts, retries and
/// authentication all live here, never in callers.
///
/// # Errors
///
/// `fetch` should return:
/// - [`StoreError::NotFound`] when the id does not exist
/// - [`StoreError::Transport`], [`StoreError::Status`] or
///   [`StoreError::Timeout`] when the store could not be reached or refused
#[async_trait]
pub trait ObjectFetcher: Send + Sync + Debug {
    /// Fetch the JSON document stored under `id`
    async fn fetch(&self, id: &ObjectId) -> StoreResult<Value>;
}

#[async_trait]
impl<T: ObjectFetcher + ?Sized> ObjectFetcher for Arc<T> {
    async fn fetch(&self, id: &ObjectId) -> StoreResult<Value> {
        (**self).fetch(id).await
    }
}
