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

//! Path resolution over git objects held in a document store
//!
//! Given a branch, a revision (only `head`) and a path, the [`Resolver`]
//! walks branch index → branch → commit → tree → ... and returns the tree or
//! blob found at the path, or a [`ResolveError`] naming the step that failed.
//!
//! # Examples
//!
//! ```no_run
//! use gitbrowse_resolver::{RepoPath, Resolver};
//! use gitbrowse_store::MemoryStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = MemoryStore::from_json_file("fixture.json").await?;
//!     let resolver = Resolver::new(Arc::new(store));
//!
//!     let resolution = resolver
//!         .resolve("master", "head", &RepoPath::parse("subfolder/README")?)
//!         .await?;
//!     println!("{} is a {}", resolution.path, resolution.object.kind());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod handle;
pub mod lookup;
pub mod path;
pub mod resolver;

pub use error::{ResolveError, ResolveResult};
pub use handle::ResolveHandle;
pub use lookup::{lookup_unique, Lookup};
pub use path::{PathError, RepoPath};
pub use resolver::{Resolution, Resolver, HEAD_REVISION};
