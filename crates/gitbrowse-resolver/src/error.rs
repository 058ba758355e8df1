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

//! Resolution error types

use crate::RepoPath;
use gitbrowse_store::{ObjectId, StoreError};
use thiserror::Error;

/// Result type for resolution
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Why a (branch, revision, path) triple could not be resolved
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Only `head` is understood as a revision
    #[error("unsupported revision {0:?} (only \"head\" is supported)")]
    UnsupportedRevision(String),

    /// The branch index has no entry with this name
    #[error("no such branch: {0}")]
    MissingBranch(String),

    /// The branch index lists the name more than once
    #[error("branch {name} is listed {count} times in the branch index")]
    AmbiguousBranch {
        /// Branch name
        name: String,
        /// Number of entries with that name
        count: usize,
    },

    /// A path segment is not a child of its parent tree
    #[error("{path}: no entry named {:?}", segment(path, *position))]
    PathNotFound {
        /// Requested path
        path: RepoPath,
        /// Zero-based index of the missing segment
        position: usize,
    },

    /// A tree holds several children with the segment's basename
    #[error("{path}: {count} entries named {:?}", segment(path, *position))]
    AmbiguousPath {
        /// Requested path
        path: RepoPath,
        /// Zero-based index of the ambiguous segment
        position: usize,
        /// Number of children sharing the basename
        count: usize,
    },

    /// A non-final segment names a file
    #[error("{path}: {} is a file, not a directory", path.prefix(position + 1))]
    NotATree {
        /// Requested path
        path: RepoPath,
        /// Zero-based index of the segment that resolved to a blob
        position: usize,
    },

    /// The store could not deliver a document
    #[error("failed to fetch {id}")]
    FetchFailed {
        /// Requested document id
        id: ObjectId,
        /// Underlying store error
        #[source]
        cause: StoreError,
    },

    /// A document was fetched but does not have the expected shape
    #[error("malformed document {id}: {reason}")]
    MalformedDocument {
        /// Offending document id
        id: ObjectId,
        /// What was wrong with it
        reason: String,
    },
}

fn segment(path: &RepoPath, position: usize) -> &str {
    path.segments().get(position).map(String::as_str).unwrap_or("")
}

impl ResolveError {
    /// Wrap a store error for `id`, keeping shape errors apart from transport ones
    pub fn from_store(id: &ObjectId, cause: StoreError) -> Self {
        match cause {
            StoreError::InvalidDocument { reason, .. } => ResolveError::MalformedDocument {
                id: id.clone(),
                reason,
            },
            cause => ResolveError::FetchFailed {
                id: id.clone(),
                cause,
            },
        }
    }

    /// Whether the requested thing does not exist (branch or path)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ResolveError::MissingBranch(_) | ResolveError::PathNotFound { .. }
        )
    }

    /// Whether the store failed to deliver a document
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, ResolveError::FetchFailed { .. })
    }
}
