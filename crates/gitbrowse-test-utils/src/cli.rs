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

//! CLI command helpers for testing the gitbrowse binary.

use crate::FixtureRepo;
use assert_cmd::Command;
use tempfile::NamedTempFile;

/// Creates a new gitbrowse Command for testing.
///
/// # Example
/// ```ignore
/// use gitbrowse_test_utils::gitbrowse;
///
/// gitbrowse().arg("--help").assert().success();
/// ```
#[allow(deprecated)]
#[allow(clippy::expect_used)]
pub fn gitbrowse() -> Command {
    Command::cargo_bin("gitbrowse").expect("gitbrowse binary not found")
}

/// Write `repo` to a temporary JSON fixture file usable with `--fixture`.
///
/// The file is deleted when the returned handle is dropped.
#[allow(clippy::expect_used)]
pub fn fixture_file(repo: &FixtureRepo) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .prefix("gitbrowse-fixture-")
        .suffix(".json")
        .tempfile()
        .expect("failed to create fixture file");
    repo.write_json(file.path()).expect("failed to write fixture file");
    file
}
