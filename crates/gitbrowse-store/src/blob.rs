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

//! Blob documents
//!
//! Blob content is stored either as already-decoded text (`"encoding": "raw"`,
//! content under `raw`) or as base64 (`"encoding": "base64"`, content under
//! `base64`). Whether a blob is text or binary is not recorded here; callers
//! sniff the MIME type from the basename.

use gitbrowse_codec::{base64_decode, utf8_decode, utf8_encode, CodecResult};
use serde::{Deserialize, Serialize};

/// How a blob's content is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlobEncoding {
    /// Content is text, stored verbatim
    Raw,
    /// Content is base64 and must be decoded
    Base64,
}

/// Blob content tagged with its storage encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlobContent {
    /// Already-decoded text
    Raw(String),
    /// Base64-encoded bytes
    Base64(String),
}

/// Blob object (file content)
///
/// # Examples
///
/// ```
/// use gitbrowse_store::Blob;
///
/// let blob: Blob = serde_json::from_str(
///     r#"{"sha": "b1", "encoding": "base64", "base64": "aGVsbG8K"}"#
/// ).unwrap();
/// assert_eq!(blob.bytes(), b"hello\n");
/// assert_eq!(blob.text().unwrap(), "hello\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BlobRecord", into = "BlobRecord")]
pub struct Blob {
    /// Git sha of the blob
    pub sha: String,

    /// Stored content
    pub content: BlobContent,
}

impl Blob {
    /// Create a blob holding raw text
    pub fn raw(sha: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            content: BlobContent::Raw(text.into()),
        }
    }

    /// Create a blob holding base64 content
    pub fn base64(sha: impl Into<String>, encoded: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            content: BlobContent::Base64(encoded.into()),
        }
    }

    /// Storage encoding of the content
    pub fn encoding(&self) -> BlobEncoding {
        match self.content {
            BlobContent::Raw(_) => BlobEncoding::Raw,
            BlobContent::Base64(_) => BlobEncoding::Base64,
        }
    }

    /// Decoded content bytes
    pub fn bytes(&self) -> Vec<u8> {
        match &self.content {
            BlobContent::Raw(text) => utf8_encode(text),
            BlobContent::Base64(encoded) => base64_decode(encoded),
        }
    }

    /// Content as text
    ///
    /// # Errors
    ///
    /// Fails with [`CodecError::InvalidUtf8`](gitbrowse_codec::CodecError) when
    /// base64 content does not decode to valid UTF-8.
    pub fn text(&self) -> CodecResult<String> {
        match &self.content {
            BlobContent::Raw(text) => Ok(text.clone()),
            BlobContent::Base64(encoded) => utf8_decode(&base64_decode(encoded)),
        }
    }
}

/// Wire shape of a blob document
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BlobRecord {
    sha: String,
    encoding: BlobEncoding,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    raw: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base64: Option<String>,
}

impl TryFrom<BlobRecord> for Blob {
    type Error = String;

    fn try_from(record: BlobRecord) -> Result<Self, Self::Error> {
        let content = match record.encoding {
            BlobEncoding::Raw => BlobContent::Raw(
                record
                    .raw
                    .ok_or_else(|| "raw blob without `raw` field".to_string())?,
            ),
            BlobEncoding::Base64 => BlobContent::Base64(
                record
                    .base64
                    .ok_or_else(|| "base64 blob without `base64` field".to_string())?,
            ),
        };
        Ok(Blob {
            sha: record.sha,
            content,
        })
    }
}

impl From<Blob> for BlobRecord {
    fn from(blob: Blob) -> Self {
        match blob.content {
            BlobContent::Raw(text) => BlobRecord {
                sha: blob.sha,
                encoding: BlobEncoding::Raw,
                raw: Some(text),
                base64: None,
            },
            BlobContent::Base64(encoded) => BlobRecord {
                sha: blob.sha,
                encoding: BlobEncoding::Base64,
                raw: None,
                base64: Some(encoded),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_blob() {
        let blob: Blob = serde_json::from_value(json!({
            "_id": "git-object-b1",
            "type": "git-blob",
            "sha": "b1",
            "encoding": "raw",
            "raw": "Just a minimal git repository for testing\r\n"
        }))
        .unwrap();

        assert_eq!(blob.encoding(), BlobEncoding::Raw);
        assert_eq!(
            blob.text().unwrap(),
            "Just a minimal git repository for testing\r\n"
        );
        assert_eq!(blob.bytes().len(), 43);
    }

    #[test]
    fn test_base64_blob_binary() {
        let blob = Blob::base64("b2", "AP8=");
        assert_eq!(blob.encoding(), BlobEncoding::Base64);
        assert_eq!(blob.bytes(), vec![0x00, 0xff]);
        assert!(blob.text().unwrap_err().is_invalid_utf8());
    }

    #[test]
    fn test_missing_content_field_rejected() {
        let err = serde_json::from_value::<Blob>(json!({
            "sha": "b1",
            "encoding": "base64",
            "raw": "oops"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("base64 blob without `base64` field"));
    }

    #[test]
    fn test_unknown_encoding_rejected() {
        assert!(serde_json::from_value::<Blob>(json!({
            "sha": "b1",
            "encoding": "gzip",
            "gzip": "..."
        }))
        .is_err());
    }

    #[test]
    fn test_serialize_wire_shape() {
        let value = serde_json::to_value(Blob::raw("b1", "hi")).unwrap();
        assert_eq!(value, json!({"sha": "b1", "encoding": "raw", "raw": "hi"}));

        let value = serde_json::to_value(Blob::base64("b2", "aGk=")).unwrap();
        assert_eq!(
            value,
            json!({"sha": "b2", "encoding": "base64", "base64": "aGk="})
        );
    }
}
