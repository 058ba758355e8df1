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

//! Document identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Id of the branch index document
pub const BRANCH_INDEX_ID: &str = "git-branches";

/// Opaque key of a document in the store
///
/// Git objects are stored content-addressed (`git-object-<sha>`), so an id is
/// never reused for different content. Branch documents and the branch index
/// use fixed names.
///
/// # Examples
///
/// ```
/// use gitbrowse_store::ObjectId;
///
/// let id = ObjectId::for_object("3b18e512dba79e4c8300dd08aeb37f8e728b8dad");
/// assert_eq!(id.as_str(), "git-object-3b18e512dba79e4c8300dd08aeb37f8e728b8dad");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Wrap an existing id
    pub fn new(id: impl Into<String>) -> Self {
        ObjectId(id.into())
    }

    /// Id of a git object document with the given sha
    pub fn for_object(sha: &str) -> Self {
        ObjectId(format!("git-object-{}", sha))
    }

    /// Id of the branch document for `name`
    pub fn for_branch(name: &str) -> Self {
        ObjectId(format!("git-branch-{}", name))
    }

    /// Id of the branch index document
    pub fn branch_index() -> Self {
        ObjectId(BRANCH_INDEX_ID.to_string())
    }

    /// Borrow the id as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        ObjectId(id.to_string())
    }
}

impl From<String> for ObjectId {
    fn from(id: String) -> Self {
        ObjectId(id)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
