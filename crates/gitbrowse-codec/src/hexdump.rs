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

//! Canonical hexdump formatting
//!
//! Output follows the `hexdump -C` layout, with each data line ending in
//! `\r\n`:
//!
//! ```text
//! 00000000  48 65 6c 6c 6f 2c 20 57  6f 72 6c 64 21 0a        |Hello, World!.|
//! 0000000e
//! ```

use std::fmt::Write as _;

/// Number of bytes rendered on each data line
pub const BYTES_PER_LINE: usize = 16;

/// Width of the hex block before the midpoint gap is inserted
const HEX_BLOCK_WIDTH: usize = BYTES_PER_LINE * 3;

const LINE_TERMINATOR: &str = "\r\n";

/// Format bytes as a canonical hexdump
///
/// Each data line holds up to 16 bytes: an 8-digit hex offset, the hex
/// octets split into two groups of eight, and the printable ASCII rendering
/// between `|` bars (bytes outside `0x20..=0x7e` shown as `.`), terminated
/// by `\r\n`. A final line
/// holding only the total length terminates the dump, without a line
/// terminator of its own.
///
/// # Examples
///
/// ```
/// use gitbrowse_codec::hexdump;
///
/// assert_eq!(hexdump(&[]), "00000000");
/// assert_eq!(
///     hexdump(b"hi"),
///     "00000000  68 69                                             |hi|\r\n00000002"
/// );
/// ```
pub fn hexdump(bytes: &[u8]) -> String {
    let lines = bytes.len().div_ceil(BYTES_PER_LINE);
    let mut out = String::with_capacity((lines + 1) * 80);

    for (index, chunk) in bytes.chunks(BYTES_PER_LINE).enumerate() {
        write_line(&mut out, index * BYTES_PER_LINE, chunk);
    }

    let _ = write!(out, "{:08x}", bytes.len());
    out
}

fn write_line(out: &mut String, offset: usize, chunk: &[u8]) {
    let octets: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
    let mut hex_block = format!("{:<width$}", octets.join(" "), width = HEX_BLOCK_WIDTH);
    hex_block.insert(HEX_BLOCK_WIDTH / 2, ' ');

    let ascii: String = chunk.iter().map(|&b| printable(b)).collect();

    let _ = write!(
        out,
        "{:08x}  {} |{}|{}",
        offset, hex_block, ascii, LINE_TERMINATOR
    );
}

fn printable(byte: u8) -> char {
    if (0x20..=0x7e).contains(&byte) {
        byte as char
    } else {
        '.'
    }
}
