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

//! Commit documents
//!
//! A commit references exactly one tree and zero or more parent commits.
//! Commits are immutable once written to the store.

use crate::ObjectRef;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Author or committer information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Name of the author or committer
    pub name: String,

    /// Email address
    pub email: String,

    /// When the action occurred, with the original UTC offset
    pub date: DateTime<FixedOffset>,
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {}", self.name, self.email, self.date.to_rfc3339())
    }
}

/// Commit object
///
/// # Examples
///
/// ```
/// use gitbrowse_store::Commit;
///
/// let commit: Commit = serde_json::from_str(r#"{
///     "sha": "c1",
///     "tree": {"_id": "git-object-t1", "sha": "t1"},
///     "parents": [],
///     "author": {"name": "A", "email": "a@example.com", "date": "2011-06-17T14:53:35-07:00"},
///     "committer": {"name": "A", "email": "a@example.com", "date": "2011-06-17T14:53:35-07:00"},
///     "message": "Initial commit"
/// }"#).unwrap();
/// assert!(commit.is_root());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Git sha of the commit
    pub sha: String,

    /// Root tree of the snapshot
    pub tree: ObjectRef,

    /// Parent commits (empty for a root commit)
    #[serde(default)]
    pub parents: Vec<ObjectRef>,

    /// Author signature
    pub author: Signature,

    /// Committer signature
    pub committer: Signature,

    /// Commit message
    #[serde(default)]
    pub message: String,
}

impl Commit {
    /// Whether this commit has no parents
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// Whether this commit has more than one parent
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// First line of the commit message
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}
