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

//! Builders for git object documents.
//!
//! Shas are derived from document content so the same fixture always
//! produces the same ids.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use gitbrowse_store::{
    Blob, BranchEntry, Commit, DocumentKind, MemoryStore, ObjectId, ObjectRef, Signature, Tree,
    TreeEntry,
};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::Path;

/// Fixed timestamp used for every fixture signature.
pub const FIXTURE_DATE: &str = "2011-06-17T14:53:35-07:00";

/// Literate Python source used by [`sample_repo`].
pub const SAMPLE_HELLO_PY: &str = "\
# Greets the world.
#
# Run with python3.
import sys

def main():
    # Print a greeting
    print(\"hello\")
";

/// Literate JavaScript source used by [`sample_repo`].
pub const SAMPLE_MAIN_JS: &str = "\
// Entry point
function main() {
  return 42;
}
";

/// First bytes of a PNG file, used as binary blob content.
pub const SAMPLE_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01,
];

/// A set of git object documents keyed by id.
///
/// # Example
/// ```
/// use gitbrowse_test_utils::{file_entry, FixtureRepo};
///
/// let mut repo = FixtureRepo::new();
/// let readme = repo.blob("hello\n");
/// let tree = repo.tree(vec![file_entry("README", readme)]);
/// let commit = repo.commit(tree, vec![], "Initial commit");
/// repo.branch("master", commit);
///
/// let json = repo.to_json();
/// assert!(json.get("git-branches").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixtureRepo {
    documents: BTreeMap<String, Value>,
    branches: Vec<BranchEntry>,
}

impl FixtureRepo {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text blob stored with `raw` encoding.
    pub fn blob(&mut self, text: &str) -> ObjectRef {
        let sha = content_sha("blob", text.as_bytes());
        self.add_object(&sha, DocumentKind::Blob, to_value(&Blob::raw(&sha, text)))
    }

    /// Add a blob stored with `base64` encoding.
    pub fn binary_blob(&mut self, bytes: &[u8]) -> ObjectRef {
        let sha = content_sha("blob", bytes);
        let encoded = STANDARD.encode(bytes);
        self.add_object(&sha, DocumentKind::Blob, to_value(&Blob::base64(&sha, encoded)))
    }

    /// Add a tree with the given entries, in order.
    pub fn tree(&mut self, children: Vec<TreeEntry>) -> ObjectRef {
        let listing: String = children
            .iter()
            .map(|e| format!("{} {} {}\n", e.mode, e.basename, e.child.id))
            .collect();
        let sha = content_sha("tree", listing.as_bytes());
        self.add_object(&sha, DocumentKind::Tree, to_value(&Tree { sha: sha.clone(), children }))
    }

    /// Add a commit of `tree`.
    pub fn commit(&mut self, tree: ObjectRef, parents: Vec<ObjectRef>, message: &str) -> ObjectRef {
        let mut hashed = format!("tree {}\n", tree.id);
        for parent in &parents {
            hashed.push_str(&format!("parent {}\n", parent.id));
        }
        hashed.push_str(message);
        let sha = content_sha("commit", hashed.as_bytes());

        let commit = Commit {
            sha: sha.clone(),
            tree,
            parents,
            author: signature(),
            committer: signature(),
            message: message.to_string(),
        };
        self.add_object(&sha, DocumentKind::Commit, to_value(&commit))
    }

    /// Add a branch document pointing at `commit` and list it in the index.
    ///
    /// Adding the same name twice produces a duplicate index entry.
    pub fn branch(&mut self, name: &str, commit: ObjectRef) -> &mut Self {
        let id = ObjectId::for_branch(name);
        let mut doc = Map::new();
        doc.insert("branch".into(), Value::String(name.to_string()));
        doc.insert("commit".into(), to_value(&commit));
        self.insert(id.clone(), DocumentKind::Branch, Value::Object(doc));
        self.branches.push(BranchEntry::new(name, id));
        self
    }

    /// List a branch in the index without adding its branch document.
    pub fn index_entry(&mut self, name: &str, id: ObjectId) -> &mut Self {
        self.branches.push(BranchEntry::new(name, id));
        self
    }

    /// Insert an arbitrary document under `id`.
    pub fn insert_raw(&mut self, id: impl Into<String>, document: Value) -> &mut Self {
        self.documents.insert(id.into(), document);
        self
    }

    /// Remove a document, returning it.
    pub fn remove(&mut self, id: &ObjectId) -> Option<Value> {
        self.documents.remove(id.as_str())
    }

    /// Id of the head commit of `name`, if the branch was added with [`branch`](Self::branch).
    pub fn head_of(&self, name: &str) -> Option<ObjectId> {
        let doc = self.documents.get(ObjectId::for_branch(name).as_str())?;
        doc.get("commit")?
            .get("_id")?
            .as_str()
            .map(ObjectId::new)
    }

    /// All documents, including the branch index, as an id → document object.
    pub fn to_json(&self) -> Value {
        let mut all: Map<String, Value> = self
            .documents
            .iter()
            .map(|(id, doc)| (id.clone(), doc.clone()))
            .collect();
        all.insert(ObjectId::branch_index().to_string(), self.branch_index());
        Value::Object(all)
    }

    /// Load the documents into a [`MemoryStore`].
    pub fn into_store(self) -> MemoryStore {
        let documents = match self.to_json() {
            Value::Object(map) => map.into_iter().map(|(id, doc)| (ObjectId::new(id), doc)).collect(),
            _ => Default::default(),
        };
        MemoryStore::with_documents(documents)
    }

    /// Write the documents as a pretty-printed JSON fixture file.
    pub fn write_json(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&self.to_json())?;
        std::fs::write(path, json)
    }

    fn branch_index(&self) -> Value {
        let mut index = Map::new();
        index.insert("_id".into(), Value::String(ObjectId::branch_index().to_string()));
        index.insert(
            "type".into(),
            Value::String(DocumentKind::BranchIndex.type_name().to_string()),
        );
        index.insert(
            "branches".into(),
            Value::Array(self.branches.iter().map(to_value).collect()),
        );
        Value::Object(index)
    }

    fn add_object(&mut self, sha: &str, kind: DocumentKind, document: Value) -> ObjectRef {
        let id = ObjectId::for_object(sha);
        self.insert(id.clone(), kind, document);
        ObjectRef::with_sha(id, sha)
    }

    fn insert(&mut self, id: ObjectId, kind: DocumentKind, document: Value) {
        let mut document = match document {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        document.insert("_id".into(), Value::String(id.to_string()));
        document.insert("type".into(), Value::String(kind.type_name().to_string()));
        self.documents.insert(id.to_string(), Value::Object(document));
    }
}

/// Tree entry for a file (`100644`).
pub fn file_entry(basename: &str, child: ObjectRef) -> TreeEntry {
    TreeEntry::new("100644", basename, child)
}

/// Tree entry for a subdirectory (`40000`).
pub fn dir_entry(basename: &str, child: ObjectRef) -> TreeEntry {
    TreeEntry::new("40000", basename, child)
}

/// A small two-branch repository.
///
/// `master` (two commits):
/// ```text
/// README
/// hello.py
/// logo.png      (base64 blob)
/// src/main.js
/// src/lib/util.js
/// ```
/// `dev` points at the first commit, which only has `README`.
pub fn sample_repo() -> FixtureRepo {
    let mut repo = FixtureRepo::new();

    let readme = repo.blob("# Sample\n\nA sample repository.\n");
    let first_tree = repo.tree(vec![file_entry("README", readme.clone())]);
    let first = repo.commit(first_tree, vec![], "Initial commit");

    let hello = repo.blob(SAMPLE_HELLO_PY);
    let logo = repo.binary_blob(SAMPLE_PNG);
    let main_js = repo.blob(SAMPLE_MAIN_JS);
    let util_js = repo.blob("// Helpers\nexports.id = (x) => x;\n");
    let lib_tree = repo.tree(vec![file_entry("util.js", util_js)]);
    let src_tree = repo.tree(vec![file_entry("main.js", main_js), dir_entry("lib", lib_tree)]);
    let root = repo.tree(vec![
        file_entry("README", readme),
        file_entry("hello.py", hello),
        file_entry("logo.png", logo),
        dir_entry("src", src_tree),
    ]);
    let second = repo.commit(root, vec![first.clone()], "Add sources\n\nAnd a logo.");

    repo.branch("master", second);
    repo.branch("dev", first);
    repo
}

fn signature() -> Signature {
    Signature {
        name: "Fixture Author".to_string(),
        email: "author@example.com".to_string(),
        date: chrono::DateTime::parse_from_rfc3339(FIXTURE_DATE).unwrap_or_default(),
    }
}

fn content_sha(kind: &str, content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{} {}\0", kind, content.len()).as_bytes());
    hasher.update(content);
    let mut sha = hex::encode(hasher.finalize());
    sha.truncate(40);
    sha
}

fn to_value<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}
