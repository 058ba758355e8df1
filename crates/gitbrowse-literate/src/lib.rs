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

//! Literate rendering of source files
//!
//! Source text is tokenized into comments and plain text by a
//! [`Highlighter`], then [`split`] pairs each run of comment lines with the
//! code that follows it:
//!
//! ```
//! use gitbrowse_literate::{split_source, CommentSyntax, Row};
//!
//! let rows = split_source("# Greet\nprint('hi')\n", &CommentSyntax::HASH);
//! assert_eq!(rows, vec![Row::new("Greet\n", "print('hi')\n")]);
//! ```
//!
//! The comment syntax for a file is normally picked from its name with
//! [`guess_mime_type`] and [`CommentSyntax::for_mime`].

pub mod highlight;
pub mod mime;
pub mod splitter;
pub mod syntax;
pub mod token;

pub use highlight::{Highlighter, LineCommentHighlighter};
pub use mime::{guess_mime_type, MimeType};
pub use splitter::{split, split_raw};
pub use syntax::CommentSyntax;
pub use token::{Row, Token};

/// Tokenize `source` with [`LineCommentHighlighter`] and split it into rows
pub fn split_source(source: &str, syntax: &CommentSyntax) -> Vec<Row> {
    split(LineCommentHighlighter.highlight(source, syntax), syntax)
}

/// Rows for a file, choosing the comment syntax from its basename
///
/// Files without a known comment marker become a single code-only row.
pub fn split_file(basename: &str, source: &str) -> Vec<Row> {
    let syntax = CommentSyntax::for_mime(&guess_mime_type(basename));
    split_source(source, &syntax)
}
