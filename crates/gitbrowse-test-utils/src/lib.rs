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

//! # GitBrowse Test Utilities
//!
//! Shared test utilities for GitBrowse crates providing:
//! - [`FixtureRepo`]: builds a store's worth of git object documents
//! - [`sample_repo`]: a small repository with text, source and binary files
//! - CLI helpers for testing the `gitbrowse` binary

pub mod cli;
pub mod fixtures;

pub use cli::{fixture_file, gitbrowse};
pub use fixtures::{
    dir_entry, file_entry, sample_repo, FixtureRepo, SAMPLE_HELLO_PY, SAMPLE_MAIN_JS, SAMPLE_PNG,
};
