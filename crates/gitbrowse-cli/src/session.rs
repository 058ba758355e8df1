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

//! Store and resolver construction from the loaded configuration

use anyhow::{bail, Context, Result};
use gitbrowse_config::{Config, StoreSource};
use gitbrowse_resolver::Resolver;
use gitbrowse_store::{CouchStore, MemoryStore, ObjectFetcher, ObjectId};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Effective settings for one invocation
pub struct Session {
    pub config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Open the configured document store
    pub async fn open_store(&self) -> Result<Arc<dyn ObjectFetcher>> {
        let store = &self.config.store;
        match store.source() {
            Some(StoreSource::Url(url)) => {
                debug!(url, timeout_secs = store.timeout_secs, "Opening CouchDB store");
                let couch = CouchStore::with_timeout(url, Duration::from_secs(store.timeout_secs))
                    .with_context(|| format!("Cannot use store at {}", url))?;
                Ok(Arc::new(couch))
            }
            Some(StoreSource::Fixture(path)) => {
                debug!(path = %path.display(), "Opening fixture store");
                let memory = MemoryStore::from_json_file(path)
                    .await
                    .with_context(|| format!("Cannot load fixture {}", path.display()))?;
                Ok(Arc::new(memory))
            }
            None => bail!(
                "No document store configured: pass --store-url or --fixture, \
                 or set store.url in the configuration file"
            ),
        }
    }

    /// A resolver over the configured store and branch index
    pub async fn resolver(&self) -> Result<Resolver> {
        let fetcher = self.open_store().await?;
        Ok(Resolver::with_branch_index(
            fetcher,
            ObjectId::new(self.config.store.branch_index_id.as_str()),
        ))
    }
}
