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

//! Lenient base64 decoding
//!
//! Stored blobs are wrapped at arbitrary widths and may or may not carry `=`
//! padding, so the decoder first strips everything outside the standard
//! alphabet and then decodes whatever groups remain.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use tracing::warn;

/// Standard alphabet, padding not required, trailing bits ignored.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

fn is_alphabet(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '/'
}

/// Decode standard base64, dropping any character outside `A-Za-z0-9+/`
///
/// Input is consumed in groups of four characters producing three bytes.
/// A trailing group of two or three characters yields one or two bytes.
/// A single dangling character carries fewer than eight bits and is ignored.
///
/// This function never fails.
///
/// # Examples
///
/// ```
/// use gitbrowse_codec::base64_decode;
///
/// assert_eq!(base64_decode("aGk="), b"hi");
/// assert_eq!(base64_decode("aG\r\nk"), b"hi");
/// assert_eq!(base64_decode("!!!"), b"");
/// ```
pub fn base64_decode(text: &str) -> Vec<u8> {
    let mut filtered: String = text.chars().filter(|c| is_alphabet(*c)).collect();
    if filtered.len() % 4 == 1 {
        filtered.pop();
    }

    match LENIENT.decode(filtered.as_bytes()) {
        Ok(bytes) => bytes,
        Err(err) => {
            // Filtering leaves only alphabet characters in valid group sizes.
            warn!(error = %err, "lenient base64 decoder rejected filtered input");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_padded() {
        assert_eq!(base64_decode("SGVsbG8sIFdvcmxkIQ=="), b"Hello, World!");
    }

    #[test]
    fn test_decode_unpadded_groups() {
        // 2 trailing characters -> 1 byte, 3 -> 2 bytes
        assert_eq!(base64_decode("YQ"), b"a");
        assert_eq!(base64_decode("YWI"), b"ab");
        assert_eq!(base64_decode("YWJj"), b"abc");
    }

    #[test]
    fn test_decode_drops_foreign_characters() {
        assert_eq!(base64_decode("YW\nJj\r\n"), b"abc");
        assert_eq!(base64_decode(" Y W J j "), b"abc");
        assert_eq!(base64_decode("YW-J_j"), b"abc");
        assert_eq!(base64_decode("YWJj===="), b"abc");
    }

    #[test]
    fn test_decode_empty_and_garbage() {
        assert!(base64_decode("").is_empty());
        assert!(base64_decode("====").is_empty());
        assert!(base64_decode("\u{e9}\u{1f600}").is_empty());
    }

    #[test]
    fn test_dangling_character_ignored() {
        assert_eq!(base64_decode("YWJjZ"), b"abc");
        assert!(base64_decode("Y").is_empty());
    }

    #[test]
    fn test_nonzero_trailing_bits_accepted() {
        // 'YR' has non-zero low bits in the second sextet
        assert_eq!(base64_decode("YR"), b"a");
    }

    #[test]
    fn test_decode_all_byte_values() {
        let encoded = "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8gISIjJCUmJygpKissLS4vMDEyMzQ1Njc4\n\
                       OTo7PD0+P0BBQkNERUZHSElKS0xNTk9QUVJTVFVWV1hZWltcXV5fYGFiY2RlZmdoaWprbG1ub3Bx\n\
                       cnN0dXZ3eHl6e3x9fn+AgYKDhIWGh4iJiouMjY6PkJGSk5SVlpeYmZqbnJ2en6ChoqOkpaanqKmq\n\
                       q6ytrq+wsbKztLW2t7i5uru8vb6/wMHCw8TFxsfIycrLzM3Oz9DR0tPU1dbX2Nna29zd3t/g4eLj\n\
                       5OXm5+jp6uvs7e7v8PHy8/T19vf4+fr7/P3+/w==";
        let expected: Vec<u8> = (0..=255u8).collect();
        assert_eq!(base64_decode(encoded), expected);
    }
}
