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

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Where documents are fetched from
    #[serde(default)]
    pub store: StoreConfig,

    /// Defaults for browsing commands
    #[serde(default)]
    pub browse: BrowseConfig,

    /// Terminal rendering
    #[serde(default)]
    pub render: RenderConfig,

    /// Logging
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Document store settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// CouchDB database URL, e.g. `http://localhost:5984/gitbrowser`
    #[serde(default)]
    pub url: Option<String>,

    /// JSON fixture file served from memory
    #[serde(default)]
    pub fixture: Option<PathBuf>,

    /// Id of the branch index document
    #[serde(default = "default_branch_index_id")]
    pub branch_index_id: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Where the configured store lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreSource<'a> {
    /// CouchDB over HTTP
    Url(&'a str),
    /// Local JSON fixture
    Fixture(&'a Path),
}

impl StoreConfig {
    /// The configured source, if any
    pub fn source(&self) -> Option<StoreSource<'_>> {
        match (&self.url, &self.fixture) {
            (Some(url), _) => Some(StoreSource::Url(url)),
            (None, Some(fixture)) => Some(StoreSource::Fixture(fixture)),
            (None, None) => None,
        }
    }
}

/// Browsing defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrowseConfig {
    /// Branch used when none is given
    #[serde(default = "default_branch")]
    pub default_branch: String,

    /// Revision used when none is given
    #[serde(default = "default_revision")]
    pub default_revision: String,
}

/// Rendering settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderConfig {
    /// Width of the documentation column
    #[serde(default = "default_doc_width")]
    pub doc_width: usize,

    /// Color output: `auto`, `always` or `never`
    #[serde(default = "default_color")]
    pub color: String,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Logging level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (pretty, compact, json)
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            url: None,
            fixture: None,
            branch_index_id: default_branch_index_id(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for BrowseConfig {
    fn default() -> Self {
        BrowseConfig {
            default_branch: default_branch(),
            default_revision: default_revision(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            doc_width: default_doc_width(),
            color: default_color(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        ObservabilityConfig {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_branch_index_id() -> String {
    "git-branches".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_branch() -> String {
    "master".to_string()
}

fn default_revision() -> String {
    "head".to_string()
}

fn default_doc_width() -> usize {
    48
}

fn default_color() -> String {
    "auto".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
