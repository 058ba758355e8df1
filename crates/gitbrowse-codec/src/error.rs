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

//! Codec error types

use thiserror::Error;

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors reported by the codec layer
///
/// Malformed base64 is never an error: unknown characters are dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The byte sequence is not valid UTF-8
    #[error("invalid UTF-8 sequence after {valid_up_to} valid bytes")]
    InvalidUtf8 {
        /// Length of the longest valid prefix
        valid_up_to: usize,
    },
}

impl CodecError {
    /// Check if this is a UTF-8 decoding error
    pub fn is_invalid_utf8(&self) -> bool {
        matches!(self, CodecError::InvalidUtf8 { .. })
    }
}

impl From<std::string::FromUtf8Error> for CodecError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        CodecError::InvalidUtf8 {
            valid_up_to: err.utf8_error().valid_up_to(),
        }
    }
}
