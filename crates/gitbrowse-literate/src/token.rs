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

//! Token stream and row types

use serde::{Deserialize, Serialize};

/// One node of a highlighted source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Token {
    /// A single comment span, without its line terminator
    Comment(String),
    /// Running text, possibly spanning several lines
    Plain(String),
}

impl Token {
    /// Comment token
    pub fn comment(text: impl Into<String>) -> Self {
        Token::Comment(text.into())
    }

    /// Plain-text token
    pub fn plain(text: impl Into<String>) -> Self {
        Token::Plain(text.into())
    }

    /// Literal text of the token
    pub fn text(&self) -> &str {
        match self {
            Token::Comment(text) | Token::Plain(text) => text,
        }
    }

    /// Whether this is a comment span
    pub fn is_comment(&self) -> bool {
        matches!(self, Token::Comment(_))
    }
}

/// One literate row: prose beside the code it introduces
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Documentation column
    pub documentation: String,
    /// Code column
    pub code: String,
}

impl Row {
    /// Build a row
    pub fn new(documentation: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            documentation: documentation.into(),
            code: code.into(),
        }
    }

    /// Whether both columns are empty
    pub fn is_empty(&self) -> bool {
        self.documentation.is_empty() && self.code.is_empty()
    }
}
