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

//! Branch documents
//!
//! The store keeps one mutable branch index (`git-branches`) listing every
//! branch, and one document per branch pointing at its head commit:
//!
//! ```json
//! {"_id": "git-branches", "type": "git-branch-list",
//!  "branches": [{"branch": "master", "_id": "git-branch-master"}]}
//!
//! {"_id": "git-branch-master", "type": "git-branch", "branch": "master",
//!  "commit": {"_id": "git-object-3b18e5...", "sha": "3b18e5..."}}
//! ```

use crate::{ObjectId, ObjectRef};
use serde::{Deserialize, Serialize};

/// Entry of the branch index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchEntry {
    /// Branch name
    #[serde(rename = "branch")]
    pub name: String,

    /// Id of the branch document
    #[serde(rename = "_id")]
    pub id: ObjectId,
}

impl BranchEntry {
    /// Create a new index entry
    pub fn new(name: impl Into<String>, id: ObjectId) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

/// The branch index document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchIndex {
    /// All known branches, in store order
    #[serde(default)]
    pub branches: Vec<BranchEntry>,
}

impl BranchIndex {
    /// Names of all branches in index order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.branches.iter().map(|b| b.name.as_str())
    }
}

/// A named pointer to a head commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// Branch name
    #[serde(rename = "branch")]
    pub name: String,

    /// Head commit of the branch
    #[serde(rename = "commit")]
    pub head_commit: ObjectRef,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_branch_index() {
        let index: BranchIndex = serde_json::from_value(json!({
            "_id": "git-branches",
            "type": "git-branch-list",
            "branches": [
                {"branch": "master", "_id": "git-branch-master"},
                {"branch": "dev", "_id": "git-branch-dev"}
            ]
        }))
        .unwrap();

        assert_eq!(index.branches.len(), 2);
        assert_eq!(index.names().collect::<Vec<_>>(), vec!["master", "dev"]);
        assert_eq!(index.branches[1].id, ObjectId::for_branch("dev"));
    }

    #[test]
    fn test_empty_branch_index() {
        let index: BranchIndex = serde_json::from_value(json!({})).unwrap();
        assert!(index.branches.is_empty());
    }

    #[test]
    fn test_parse_branch() {
        let branch: Branch = serde_json::from_value(json!({
            "_id": "git-branch-master",
            "type": "git-branch",
            "branch": "master",
            "commit": {"_id": "git-object-c1", "sha": "c1"}
        }))
        .unwrap();

        assert_eq!(branch.name, "master");
        assert_eq!(branch.head_commit.id, ObjectId::for_object("c1"));
        assert_eq!(branch.head_commit.sha.as_deref(), Some("c1"));
    }
}
