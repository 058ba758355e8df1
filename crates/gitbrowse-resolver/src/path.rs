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

//! Repository paths

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors building a repository path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A segment is empty (`a//b`, trailing `/`)
    #[error("path segment {position} is empty")]
    EmptySegment {
        /// Zero-based index of the empty segment
        position: usize,
    },
}

/// Path inside a commit's tree, as a sequence of non-empty basenames
///
/// The empty path is the root tree.
///
/// # Examples
///
/// ```
/// use gitbrowse_resolver::RepoPath;
///
/// let path: RepoPath = "subfolder/README".parse().unwrap();
/// assert_eq!(path.segments(), ["subfolder", "README"]);
/// assert_eq!(path.basename(), Some("README"));
///
/// assert!(RepoPath::parse("").unwrap().is_root());
/// assert!(RepoPath::parse("a//b").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RepoPath {
    segments: Vec<String>,
}

impl RepoPath {
    /// The root path
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from segments
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptySegment`] if any segment is empty.
    pub fn new<I, S>(segments: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if let Some(position) = segments.iter().position(|s| s.is_empty()) {
            return Err(PathError::EmptySegment { position });
        }
        Ok(Self { segments })
    }

    /// Parse a `/`-separated path
    ///
    /// `""` and `"/"` are the root. One leading `/` is ignored; any other
    /// empty segment is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptySegment`] for `a//b`, `a/` and similar.
    pub fn parse(text: &str) -> Result<Self, PathError> {
        let text = text.strip_prefix('/').unwrap_or(text);
        if text.is_empty() {
            return Ok(Self::root());
        }
        Self::new(text.split('/'))
    }

    /// Path segments in order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Last segment, or `None` for the root
    pub fn basename(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Whether this is the root path
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path has no segments (same as [`is_root`](Self::is_root))
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The first `len` segments
    pub fn prefix(&self, len: usize) -> RepoPath {
        RepoPath {
            segments: self.segments[..len.min(self.segments.len())].to_vec(),
        }
    }

    /// This path extended by one segment
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptySegment`] if `segment` is empty.
    pub fn join(&self, segment: impl Into<String>) -> Result<RepoPath, PathError> {
        let segment = segment.into();
        if segment.is_empty() {
            return Err(PathError::EmptySegment {
                position: self.segments.len(),
            });
        }
        let mut segments = self.segments.clone();
        segments.push(segment);
        Ok(RepoPath { segments })
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            f.write_str("/")
        } else {
            f.write_str(&self.segments.join("/"))
        }
    }
}

impl FromStr for RepoPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RepoPath::parse(s)
    }
}
