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

//! CouchDB document fetcher
//!
//! Issues `GET {database_url}/{encoded id}` and parses the JSON body. Ids are
//! percent-encoded as a single path segment, so `/` inside an id never
//! escapes into the URL path.

use crate::{ObjectFetcher, ObjectId, StoreError, StoreResult};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetcher over the CouchDB HTTP API
#[derive(Debug, Clone)]
pub struct CouchStore {
    database_url: Url,
    client: reqwest::Client,
}

impl CouchStore {
    /// Create a fetcher for the database at `database_url` with the default timeout
    ///
    /// # Arguments
    ///
    /// * `database_url` - Database URL, e.g. `"http://localhost:5984/gitbrowser"`
    ///
    /// # Errors
    ///
    /// Fails when the URL does not parse or is not http(s).
    pub fn new(database_url: &str) -> StoreResult<Self> {
        Self::with_timeout(database_url, DEFAULT_TIMEOUT)
    }

    /// Create a fetcher with an explicit request timeout
    ///
    /// # Errors
    ///
    /// Fails when the URL is invalid or the HTTP client cannot be built.
    pub fn with_timeout(database_url: &str, timeout: Duration) -> StoreResult<Self> {
        let database_url = Url::parse(database_url)
            .map_err(|e| StoreError::transport(format!("invalid database URL {}: {}", database_url, e)))?;
        if !matches!(database_url.scheme(), "http" | "https") {
            return Err(StoreError::transport(format!(
                "unsupported URL scheme: {}",
                database_url.scheme()
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            database_url,
            client,
        })
    }

    /// Database URL requests are issued against
    pub fn database_url(&self) -> &Url {
        &self.database_url
    }

    /// URL of the document with the given id
    ///
    /// # Errors
    ///
    /// Fails when the database URL cannot carry path segments.
    pub fn document_url(&self, id: &ObjectId) -> StoreResult<Url> {
        let mut url = self.database_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::transport(format!("cannot append to URL {}", self.database_url)))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }
}

#[async_trait]
impl ObjectFetcher for CouchStore {
    async fn fetch(&self, id: &ObjectId) -> StoreResult<Value> {
        let url = self.document_url(id)?;
        debug!(%url, object_id = %id, "GET document");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                StoreError::Timeout(format!("GET {}", id))
            } else {
                StoreError::transport(format!("GET {} failed: {}", id, e))
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::not_found(id.as_str()));
        }
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                id: id.to_string(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| StoreError::transport(format!("failed to parse {}: {}", id, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_url_encodes_id() {
        let store = CouchStore::new("http://localhost:5984/gitbrowser").unwrap();
        let url = store.document_url(&ObjectId::new("git-branches")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5984/gitbrowser/git-branches");

        let url = store.document_url(&ObjectId::new("a/b c")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5984/gitbrowser/a%2Fb%20c");
    }

    #[test]
    fn test_trailing_slash_in_database_url() {
        let store = CouchStore::new("http://localhost:5984/gitbrowser/").unwrap();
        let url = store.document_url(&ObjectId::new("git-object-1")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5984/gitbrowser/git-object-1");
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(CouchStore::new("not a url").is_err());
        assert!(CouchStore::new("ftp://example.com/db").is_err());
    }
}
