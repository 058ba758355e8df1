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

//! Byte and text codecs for blob content held in the document store
//!
//! Blobs arrive either as raw text or as base64. This crate provides the
//! conversions the resolver and the literate splitter rely on:
//!
//! - **Lenient base64**: characters outside `A-Za-z0-9+/` (padding included)
//!   are dropped before decoding, and decoding never fails
//! - **UTF-8**: strict decoding of byte sequences into text, and the inverse
//!   encoding
//! - **Hexdump**: canonical 16-bytes-per-line dumps for binary blobs
//!
//! All functions are pure and allocate their output.
//!
//! # Examples
//!
//! ```
//! use gitbrowse_codec::{base64_decode, hexdump, utf8_decode, utf8_encode};
//!
//! let bytes = base64_decode("aGVsbG8=");
//! assert_eq!(bytes, b"hello");
//!
//! let text = utf8_decode(&bytes).unwrap();
//! assert_eq!(utf8_encode(&text), bytes);
//!
//! assert_eq!(hexdump(&[]), "00000000");
//! ```

mod error;
mod hexdump;
mod lenient;
mod utf8;

pub use error::{CodecError, CodecResult};
pub use hexdump::{hexdump, BYTES_PER_LINE};
pub use lenient::base64_decode;
pub use utf8::{utf8_decode, utf8_encode};
