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

//! Line-comment syntax per content type

use crate::mime::MimeType;

/// How line comments are written in a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentSyntax {
    marker: Option<&'static str>,
}

impl CommentSyntax {
    /// `#` comments (Python, shell, CoffeeScript)
    pub const HASH: CommentSyntax = CommentSyntax { marker: Some("#") };

    /// `//` comments (JavaScript)
    pub const SLASHES: CommentSyntax = CommentSyntax { marker: Some("//") };

    /// No line comments; documentation is left untouched
    pub const NONE: CommentSyntax = CommentSyntax { marker: None };

    /// Syntax with a custom line-comment marker
    pub const fn with_marker(marker: &'static str) -> Self {
        CommentSyntax {
            marker: Some(marker),
        }
    }

    /// Comment syntax for a content type
    pub fn for_mime(mime: &MimeType) -> Self {
        match *mime {
            MimeType::PYTHON | MimeType::SHELL | MimeType::COFFEESCRIPT => Self::HASH,
            MimeType::JAVASCRIPT | MimeType::JSON => Self::SLASHES,
            _ => Self::NONE,
        }
    }

    /// The line-comment marker, if the language has one
    pub fn marker(&self) -> Option<&'static str> {
        self.marker
    }

    /// Strip the marker from one line
    ///
    /// Removes leading whitespace, the marker and a single space after it.
    /// Lines that do not start with the marker are returned unchanged.
    pub fn strip_line<'a>(&self, line: &'a str) -> &'a str {
        let Some(marker) = self.marker else {
            return line;
        };
        match line.trim_start().strip_prefix(marker) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }

    /// Strip the marker from every line of `documentation`, keeping newlines
    ///
    /// # Examples
    ///
    /// ```
    /// use gitbrowse_literate::CommentSyntax;
    ///
    /// let doc = CommentSyntax::HASH.strip("# Greets the world.\n#\n  # Indented\n");
    /// assert_eq!(doc, "Greets the world.\n\nIndented\n");
    /// ```
    pub fn strip(&self, documentation: &str) -> String {
        if self.marker.is_none() {
            return documentation.to_string();
        }
        documentation
            .split_inclusive('\n')
            .map(|line| self.strip_line(line))
            .collect()
    }
}
