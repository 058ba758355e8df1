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

//! Tree object representing directory structures
//!
//! A tree lists its children in store order. Basenames are expected to be
//! unique but the store does not enforce it, so lookups report duplicates
//! instead of picking one.

use crate::ObjectRef;
use serde::{Deserialize, Serialize};

/// Entry in a tree (file or subdirectory)
///
/// # Examples
///
/// ```
/// use gitbrowse_store::{ObjectId, ObjectRef, TreeEntry};
///
/// let entry = TreeEntry::new("100644", "README", ObjectRef::new(ObjectId::for_object("b1")));
/// assert!(!entry.is_dir());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    /// Mode string, e.g. `"100644"`, `"40000"` or a `"d..."` directory mode
    pub mode: String,

    /// File name (not full path)
    pub basename: String,

    /// Referenced blob or tree
    pub child: ObjectRef,
}

impl TreeEntry {
    /// Create a new tree entry
    pub fn new(mode: impl Into<String>, basename: impl Into<String>, child: ObjectRef) -> Self {
        Self {
            mode: mode.into(),
            basename: basename.into(),
            child,
        }
    }

    /// Whether the mode marks a subdirectory
    pub fn is_dir(&self) -> bool {
        self.mode.starts_with('d') || self.mode == "40000" || self.mode == "040000"
    }
}

/// Tree object representing a directory snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    /// Git sha of the tree
    #[serde(default)]
    pub sha: String,

    /// Entries in store order
    #[serde(default)]
    pub children: Vec<TreeEntry>,
}

impl Tree {
    /// Entries whose basename equals `basename`
    pub fn entries_named<'a>(&'a self, basename: &'a str) -> impl Iterator<Item = &'a TreeEntry> {
        self.children.iter().filter(move |e| e.basename == basename)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the tree has no entries
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
