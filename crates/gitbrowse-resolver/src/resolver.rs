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

//! Resolution of (branch, revision, path) to a stored object
//!
//! Every step needs the previous document to know the next id, so fetches are
//! strictly sequential:
//!
//! ```text
//! git-branches -> git-branch-<name> -> commit -> root tree -> segment 0 -> ...
//! ```
//!
//! Dropping the future returned by [`Resolver::resolve`] cancels the walk; no
//! fetch is issued after the drop.

use crate::handle::ResolveHandle;
use crate::{lookup_unique, Lookup, RepoPath, ResolveError, ResolveResult};
use gitbrowse_store::{
    parse_document, AnyObject, Branch, BranchIndex, Commit, ObjectFetcher, ObjectId, TreeOrBlob,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// The only revision understood today
pub const HEAD_REVISION: &str = "head";

/// Outcome of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Branch name that was resolved
    pub branch: String,
    /// Id of the branch head commit
    pub commit_id: ObjectId,
    /// The branch head commit
    pub commit: Commit,
    /// Requested path
    pub path: RepoPath,
    /// Id of the object at the path
    pub object_id: ObjectId,
    /// The object at the path
    pub object: TreeOrBlob,
}

impl Resolution {
    /// Basename of the resolved object, `None` for the root tree
    pub fn basename(&self) -> Option<&str> {
        self.path.basename()
    }
}

/// Walks the object graph of one store
#[derive(Debug, Clone)]
pub struct Resolver {
    fetcher: Arc<dyn ObjectFetcher>,
    branch_index: ObjectId,
}

impl Resolver {
    /// Resolver over `fetcher` using the standard `git-branches` index
    pub fn new(fetcher: Arc<dyn ObjectFetcher>) -> Self {
        Self::with_branch_index(fetcher, ObjectId::branch_index())
    }

    /// Resolver reading its branch index from a custom document id
    pub fn with_branch_index(fetcher: Arc<dyn ObjectFetcher>, branch_index: ObjectId) -> Self {
        Self {
            fetcher,
            branch_index,
        }
    }

    /// Id of the branch index document
    pub fn branch_index_id(&self) -> &ObjectId {
        &self.branch_index
    }

    /// Fetch and parse the branch index
    pub async fn list_branches(&self) -> ResolveResult<BranchIndex> {
        self.fetch_as(&self.branch_index).await
    }

    /// Fetch any document and classify it
    pub async fn fetch_object(&self, id: &ObjectId) -> ResolveResult<AnyObject> {
        let value = self.fetch_raw(id).await?;
        AnyObject::from_document(id, value).map_err(|e| ResolveError::from_store(id, e))
    }

    /// Resolve `path` in the snapshot at `revision` of `branch`
    ///
    /// # Errors
    ///
    /// - [`ResolveError::UnsupportedRevision`] for anything but `"head"`,
    ///   before any fetch
    /// - [`ResolveError::MissingBranch`] / [`ResolveError::AmbiguousBranch`]
    /// - [`ResolveError::PathNotFound`], [`ResolveError::AmbiguousPath`],
    ///   [`ResolveError::NotATree`] naming the failing segment
    /// - [`ResolveError::FetchFailed`] / [`ResolveError::MalformedDocument`]
    ///   when the store misbehaves
    #[instrument(level = "debug", skip(self, path), fields(path = %path))]
    pub async fn resolve(
        &self,
        branch: &str,
        revision: &str,
        path: &RepoPath,
    ) -> ResolveResult<Resolution> {
        if revision != HEAD_REVISION {
            return Err(ResolveError::UnsupportedRevision(revision.to_string()));
        }

        let index: BranchIndex = self.fetch_as(&self.branch_index).await?;
        let branch_id = match lookup_unique(&index.branches, |b| b.name.as_str(), branch) {
            Lookup::Found(entry) => entry.id.clone(),
            Lookup::NotFound => return Err(ResolveError::MissingBranch(branch.to_string())),
            Lookup::Ambiguous(count) => {
                warn!(branch, count, "Branch listed more than once");
                return Err(ResolveError::AmbiguousBranch {
                    name: branch.to_string(),
                    count,
                });
            }
        };

        let branch_doc: Branch = self.fetch_as(&branch_id).await?;
        let commit_id = branch_doc.head_commit.id;
        let commit: Commit = self.fetch_as(&commit_id).await?;
        debug!(commit = %commit.sha, "Resolved branch head");

        let mut object_id = commit.tree.id.clone();
        let mut object = self.fetch_tree_or_blob(&object_id).await?;

        let segments = path.segments();
        for (position, segment) in segments.iter().enumerate() {
            let tree = match &object {
                TreeOrBlob::Tree(tree) => tree,
                TreeOrBlob::Blob(_) => {
                    return Err(ResolveError::MalformedDocument {
                        id: object_id,
                        reason: "commit tree is a blob".to_string(),
                    })
                }
            };

            let child_id = match lookup_unique(&tree.children, |e| e.basename.as_str(), segment) {
                Lookup::Found(entry) => entry.child.id.clone(),
                Lookup::NotFound => {
                    return Err(ResolveError::PathNotFound {
                        path: path.clone(),
                        position,
                    })
                }
                Lookup::Ambiguous(count) => {
                    return Err(ResolveError::AmbiguousPath {
                        path: path.clone(),
                        position,
                        count,
                    })
                }
            };

            object = self.fetch_tree_or_blob(&child_id).await?;
            object_id = child_id;

            if position + 1 < segments.len() && object.as_tree().is_none() {
                return Err(ResolveError::NotATree {
                    path: path.clone(),
                    position,
                });
            }
        }

        info!(
            branch,
            path = %path,
            object = %object_id,
            kind = %object.kind(),
            "Resolved path"
        );

        Ok(Resolution {
            branch: branch.to_string(),
            commit_id,
            commit,
            path: path.clone(),
            object_id,
            object,
        })
    }

    /// Resolve on a spawned task and report through callbacks
    ///
    /// Exactly one of `on_success` or `on_error` runs, unless the returned
    /// handle is cancelled first, in which case neither does. Must be called
    /// from within a Tokio runtime.
    pub fn spawn_resolve<S, E>(
        &self,
        branch: impl Into<String>,
        revision: impl Into<String>,
        path: RepoPath,
        on_success: S,
        on_error: E,
    ) -> ResolveHandle
    where
        S: FnOnce(Resolution) + Send + 'static,
        E: FnOnce(ResolveError) + Send + 'static,
    {
        let resolver = self.clone();
        let branch = branch.into();
        let revision = revision.into();

        let task = tokio::spawn(async move {
            match resolver.resolve(&branch, &revision, &path).await {
                Ok(resolution) => on_success(resolution),
                Err(err) => on_error(err),
            }
        });
        ResolveHandle::new(task)
    }

    async fn fetch_raw(&self, id: &ObjectId) -> ResolveResult<Value> {
        debug!(object_id = %id, "Fetching");
        self.fetcher
            .fetch(id)
            .await
            .map_err(|e| ResolveError::from_store(id, e))
    }

    async fn fetch_as<T: DeserializeOwned>(&self, id: &ObjectId) -> ResolveResult<T> {
        let value = self.fetch_raw(id).await?;
        parse_document(id, value).map_err(|e| ResolveError::from_store(id, e))
    }

    async fn fetch_tree_or_blob(&self, id: &ObjectId) -> ResolveResult<TreeOrBlob> {
        let value = self.fetch_raw(id).await?;
        TreeOrBlob::from_document(id, value).map_err(|e| ResolveError::from_store(id, e))
    }
}
