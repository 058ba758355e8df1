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

//! MIME type guessing from file names

use serde::Serialize;
use std::fmt;

/// A MIME type from the built-in table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MimeType(&'static str);

impl MimeType {
    /// `application/javascript`
    pub const JAVASCRIPT: MimeType = MimeType("application/javascript");
    /// `text/x-python`
    pub const PYTHON: MimeType = MimeType("text/x-python");
    /// `application/json`
    pub const JSON: MimeType = MimeType("application/json");
    /// `text/plain`
    pub const TEXT: MimeType = MimeType("text/plain");
    /// `application/x-sh`
    pub const SHELL: MimeType = MimeType("application/x-sh");
    /// `text/html`
    pub const HTML: MimeType = MimeType("text/html");
    /// `text/css`
    pub const CSS: MimeType = MimeType("text/css");
    /// `text/x-coffeescript`
    pub const COFFEESCRIPT: MimeType = MimeType("text/x-coffeescript");
    /// `application/octet-stream`, for anything unrecognised
    pub const OCTET_STREAM: MimeType = MimeType("application/octet-stream");

    /// The type as a string
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Whether content of this type is displayed as text
    pub fn is_text(&self) -> bool {
        self.0.starts_with("text/")
            || matches!(
                *self,
                MimeType::JAVASCRIPT | MimeType::JSON | MimeType::SHELL
            )
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Suffix table, scanned in order; later matches override earlier ones
const NAME_SUFFIXES: &[(&str, MimeType)] = &[
    (".js", MimeType::JAVASCRIPT),
    (".py", MimeType::PYTHON),
    (".json", MimeType::JSON),
    (".txt", MimeType::TEXT),
    ("README", MimeType::TEXT),
    (".sh", MimeType::SHELL),
    (".html", MimeType::HTML),
    (".css", MimeType::CSS),
    (".md", MimeType::TEXT),
    (".coffee", MimeType::COFFEESCRIPT),
];

/// Guess the MIME type of a file from its basename
///
/// Matching is by case-sensitive suffix; the last matching table entry wins,
/// and unknown names are `application/octet-stream`.
///
/// # Examples
///
/// ```
/// use gitbrowse_literate::{guess_mime_type, MimeType};
///
/// assert_eq!(guess_mime_type("app.js"), MimeType::JAVASCRIPT);
/// assert_eq!(guess_mime_type("README"), MimeType::TEXT);
/// assert_eq!(guess_mime_type("logo.png"), MimeType::OCTET_STREAM);
/// ```
pub fn guess_mime_type(basename: &str) -> MimeType {
    NAME_SUFFIXES
        .iter()
        .rev()
        .find(|(suffix, _)| basename.ends_with(suffix))
        .map(|(_, mime)| *mime)
        .unwrap_or(MimeType::OCTET_STREAM)
}
