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

//! Store error types and utilities

use std::io;
use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while fetching or interpreting documents
#[derive(Error, Debug)]
pub enum StoreError {
    /// Document not found in the store
    #[error("document not found: {0}")]
    NotFound(String),

    /// Transport-level failure (connection refused, malformed response, ...)
    #[error("transport error: {0}")]
    Transport(String),

    /// The store answered with a non-success status
    #[error("store returned status {status} for {id}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested document id
        id: String,
    },

    /// Request did not complete in time
    #[error("operation timed out: {0}")]
    Timeout(String),

    /// The document exists but does not have the expected shape
    #[error("invalid document {id}: {reason}")]
    InvalidDocument {
        /// Offending document id
        id: String,
        /// What was wrong with it
        reason: String,
    },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization error outside a specific document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transparent error delegation for wrapped error types
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    /// Create a NotFound error for the given id
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        StoreError::NotFound(id.into())
    }

    /// Create a Transport error with context
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        StoreError::Transport(msg.into())
    }

    /// Create an InvalidDocument error
    pub fn invalid_document(id: impl Into<String>, reason: impl ToString) -> Self {
        StoreError::InvalidDocument {
            id: id.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    /// Check if this is an InvalidDocument error
    pub fn is_invalid_document(&self) -> bool {
        matches!(self, StoreError::InvalidDocument { .. })
    }
}
