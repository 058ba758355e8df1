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

//! Typed views over raw JSON documents
//!
//! Documents written by the sync tool carry a `type` field (`git-tree`,
//! `git-blob`, ...). Documents without one are classified by shape.

use crate::{Blob, Branch, BranchIndex, Commit, ObjectId, StoreError, StoreResult, Tree};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Reference to another document, as embedded in commits, trees and branches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    /// Id of the referenced document
    #[serde(rename = "_id")]
    pub id: ObjectId,

    /// Git sha of the referenced object, when recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

impl ObjectRef {
    /// Reference by id only
    pub fn new(id: ObjectId) -> Self {
        Self { id, sha: None }
    }

    /// Reference by id and sha
    pub fn with_sha(id: ObjectId, sha: impl Into<String>) -> Self {
        Self {
            id,
            sha: Some(sha.into()),
        }
    }
}

/// Kind of document held in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// The branch index (`git-branch-list`)
    BranchIndex,
    /// A branch document (`git-branch`)
    Branch,
    /// A commit (`git-commit`)
    Commit,
    /// A tree (`git-tree`)
    Tree,
    /// A blob (`git-blob`)
    Blob,
}

impl DocumentKind {
    /// Value of the `type` field for this kind
    pub fn type_name(&self) -> &'static str {
        match self {
            DocumentKind::BranchIndex => "git-branch-list",
            DocumentKind::Branch => "git-branch",
            DocumentKind::Commit => "git-commit",
            DocumentKind::Tree => "git-tree",
            DocumentKind::Blob => "git-blob",
        }
    }

    /// Parse a `type` field value
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "git-branch-list" => Some(DocumentKind::BranchIndex),
            "git-branch" => Some(DocumentKind::Branch),
            "git-commit" => Some(DocumentKind::Commit),
            "git-tree" => Some(DocumentKind::Tree),
            "git-blob" => Some(DocumentKind::Blob),
            _ => None,
        }
    }

    /// Classify a document by its `type` field, falling back to its shape
    pub fn detect(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        if let Some(kind) = object
            .get("type")
            .and_then(Value::as_str)
            .and_then(Self::from_type_name)
        {
            return Some(kind);
        }

        if object.contains_key("branches") {
            Some(DocumentKind::BranchIndex)
        } else if object.contains_key("children") {
            Some(DocumentKind::Tree)
        } else if object.contains_key("encoding") {
            Some(DocumentKind::Blob)
        } else if object.contains_key("tree") {
            Some(DocumentKind::Commit)
        } else if object.contains_key("branch") && object.contains_key("commit") {
            Some(DocumentKind::Branch)
        } else {
            None
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Deserialize a fetched document into `T`
///
/// # Errors
///
/// Returns [`StoreError::InvalidDocument`] naming `id` when the JSON does not
/// have the shape of `T`.
pub fn parse_document<T: DeserializeOwned>(id: &ObjectId, value: Value) -> StoreResult<T> {
    serde_json::from_value(value).map_err(|e| StoreError::invalid_document(id.as_str(), e))
}

/// Result of following a tree entry: a subdirectory or a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeOrBlob {
    /// A directory
    Tree(Tree),
    /// A file
    Blob(Blob),
}

impl TreeOrBlob {
    /// Interpret a fetched document as a tree or a blob
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidDocument`] when the document is some other
    /// kind or is malformed.
    pub fn from_document(id: &ObjectId, value: Value) -> StoreResult<Self> {
        match DocumentKind::detect(&value) {
            Some(DocumentKind::Tree) => Ok(TreeOrBlob::Tree(parse_document(id, value)?)),
            Some(DocumentKind::Blob) => Ok(TreeOrBlob::Blob(parse_document(id, value)?)),
            Some(other) => Err(StoreError::invalid_document(
                id.as_str(),
                format!("expected a tree or blob, found {}", other),
            )),
            None => Err(StoreError::invalid_document(
                id.as_str(),
                "unrecognised document shape",
            )),
        }
    }

    /// Kind of the wrapped object
    pub fn kind(&self) -> DocumentKind {
        match self {
            TreeOrBlob::Tree(_) => DocumentKind::Tree,
            TreeOrBlob::Blob(_) => DocumentKind::Blob,
        }
    }

    /// Git sha of the wrapped object
    pub fn sha(&self) -> &str {
        match self {
            TreeOrBlob::Tree(tree) => &tree.sha,
            TreeOrBlob::Blob(blob) => &blob.sha,
        }
    }

    /// The tree, if this is one
    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            TreeOrBlob::Tree(tree) => Some(tree),
            TreeOrBlob::Blob(_) => None,
        }
    }

    /// The blob, if this is one
    pub fn as_blob(&self) -> Option<&Blob> {
        match self {
            TreeOrBlob::Blob(blob) => Some(blob),
            TreeOrBlob::Tree(_) => None,
        }
    }
}

/// Any document the browser knows how to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyObject {
    /// The branch index
    BranchIndex(BranchIndex),
    /// A branch document
    Branch(Branch),
    /// A commit
    Commit(Commit),
    /// A tree
    Tree(Tree),
    /// A blob
    Blob(Blob),
}

impl AnyObject {
    /// Classify and parse a fetched document
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidDocument`] for unknown or malformed documents.
    pub fn from_document(id: &ObjectId, value: Value) -> StoreResult<Self> {
        let kind = DocumentKind::detect(&value)
            .ok_or_else(|| StoreError::invalid_document(id.as_str(), "unrecognised document shape"))?;
        Ok(match kind {
            DocumentKind::BranchIndex => AnyObject::BranchIndex(parse_document(id, value)?),
            DocumentKind::Branch => AnyObject::Branch(parse_document(id, value)?),
            DocumentKind::Commit => AnyObject::Commit(parse_document(id, value)?),
            DocumentKind::Tree => AnyObject::Tree(parse_document(id, value)?),
            DocumentKind::Blob => AnyObject::Blob(parse_document(id, value)?),
        })
    }

    /// Kind of the wrapped document
    pub fn kind(&self) -> DocumentKind {
        match self {
            AnyObject::BranchIndex(_) => DocumentKind::BranchIndex,
            AnyObject::Branch(_) => DocumentKind::Branch,
            AnyObject::Commit(_) => DocumentKind::Commit,
            AnyObject::Tree(_) => DocumentKind::Tree,
            AnyObject::Blob(_) => DocumentKind::Blob,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_by_type_field() {
        assert_eq!(
            DocumentKind::detect(&json!({"type": "git-tree", "sha": "x"})),
            Some(DocumentKind::Tree)
        );
        assert_eq!(
            DocumentKind::detect(&json!({"type": "git-branch-list"})),
            Some(DocumentKind::BranchIndex)
        );
    }

    #[test]
    fn test_detect_by_shape() {
        assert_eq!(
            DocumentKind::detect(&json!({"sha": "x", "children": []})),
            Some(DocumentKind::Tree)
        );
        assert_eq!(
            DocumentKind::detect(&json!({"sha": "x", "encoding": "raw", "raw": ""})),
            Some(DocumentKind::Blob)
        );
        assert_eq!(
            DocumentKind::detect(&json!({"sha": "x", "tree": {"_id": "t"}})),
            Some(DocumentKind::Commit)
        );
        assert_eq!(
            DocumentKind::detect(&json!({"branch": "m", "commit": {"_id": "c"}})),
            Some(DocumentKind::Branch)
        );
        assert_eq!(DocumentKind::detect(&json!({"sha": "x"})), None);
        assert_eq!(DocumentKind::detect(&json!([1, 2])), None);
    }

    #[test]
    fn test_type_name_round_trip() {
        for kind in [
            DocumentKind::BranchIndex,
            DocumentKind::Branch,
            DocumentKind::Commit,
            DocumentKind::Tree,
            DocumentKind::Blob,
        ] {
            assert_eq!(DocumentKind::from_type_name(kind.type_name()), Some(kind));
        }
        assert_eq!(DocumentKind::from_type_name("git-tag"), None);
    }

    #[test]
    fn test_tree_or_blob_rejects_commit() {
        let id = ObjectId::new("git-object-c1");
        let err = TreeOrBlob::from_document(
            &id,
            json!({"type": "git-commit", "sha": "c1", "tree": {"_id": "t"}}),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid document git-object-c1: expected a tree or blob, found git-commit"
        );
    }

    #[test]
    fn test_tree_or_blob_accessors() {
        let id = ObjectId::new("b");
        let object =
            TreeOrBlob::from_document(&id, json!({"sha": "b", "encoding": "raw", "raw": "x"}))
                .unwrap();
        assert_eq!(object.kind(), DocumentKind::Blob);
        assert_eq!(object.sha(), "b");
        assert!(object.as_blob().is_some());
        assert!(object.as_tree().is_none());
    }

    #[test]
    fn test_malformed_tree_names_document() {
        let id = ObjectId::new("git-object-t9");
        let err = TreeOrBlob::from_document(&id, json!({"type": "git-tree", "children": []}))
            .unwrap_err();
        assert!(err.is_invalid_document());
        assert!(err.to_string().contains("git-object-t9"));
    }

    #[test]
    fn test_any_object_classification() {
        let id = ObjectId::branch_index();
        let object = AnyObject::from_document(
            &id,
            json!({"branches": [{"branch": "master", "_id": "git-branch-master"}]}),
        )
        .unwrap();
        assert_eq!(object.kind(), DocumentKind::BranchIndex);

        assert!(AnyObject::from_document(&id, json!({"hello": "world"})).is_err());
    }
}
