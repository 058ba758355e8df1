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

//! UTF-8 conversion between text and byte sequences

use crate::CodecResult;

/// Decode a byte sequence as UTF-8 text
///
/// Invalid sequences (including overlong forms and encoded surrogates) are
/// reported rather than replaced.
///
/// # Errors
///
/// Returns [`CodecError::InvalidUtf8`](crate::CodecError::InvalidUtf8) with the
/// length of the valid prefix.
///
/// # Examples
///
/// ```
/// use gitbrowse_codec::utf8_decode;
///
/// assert_eq!(utf8_decode(&[0xc3, 0xa9]).unwrap(), "\u{e9}");
/// assert!(utf8_decode(&[0xc3]).is_err());
/// ```
pub fn utf8_decode(bytes: &[u8]) -> CodecResult<String> {
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Encode text as its UTF-8 byte sequence
///
/// ASCII code points map to themselves; everything else produces the full
/// multi-byte sequence, so `utf8_decode(&utf8_encode(s)) == s` for all text.
pub fn utf8_encode(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodecError;

    #[test]
    fn test_ascii_identity() {
        assert_eq!(utf8_encode("abc ~"), b"abc ~");
        assert_eq!(utf8_decode(b"abc ~").unwrap(), "abc ~");
    }

    #[test]
    fn test_multibyte_sequences() {
        assert_eq!(utf8_encode("\u{e9}"), vec![0xc3, 0xa9]);
        assert_eq!(utf8_encode("\u{20ac}"), vec![0xe2, 0x82, 0xac]);
        assert_eq!(utf8_encode("\u{1f600}"), vec![0xf0, 0x9f, 0x98, 0x80]);
        assert_eq!(utf8_encode("\0\n"), vec![0x00, 0x0a]);
    }

    #[test]
    fn test_invalid_sequences_reported() {
        assert_eq!(
            utf8_decode(&[b'o', b'k', 0x80]),
            Err(CodecError::InvalidUtf8 { valid_up_to: 2 })
        );
        // Overlong encoding of '/'
        assert!(utf8_decode(&[0xc0, 0xaf]).is_err());
        // Encoded surrogate U+D800
        assert!(utf8_decode(&[0xed, 0xa0, 0x80]).is_err());
        // Truncated sequence
        assert!(utf8_decode(&[0xe2, 0x82]).is_err());
    }

    #[test]
    fn test_empty() {
        assert!(utf8_encode("").is_empty());
        assert_eq!(utf8_decode(&[]).unwrap(), "");
    }
}
