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

//! Partition of a token stream into documentation/code rows
//!
//! A *comment line* is a comment token that ends its line: it is followed by
//! plain text starting with `\n`, or by the end of the stream. Optional
//! indentation (a plain token of spaces and tabs) may precede it.
//!
//! Each row is built in three phases:
//!
//! 1. consecutive comment lines at the head of the stream become the row's
//!    documentation, each with its newline;
//! 2. if documentation was collected and the next line is blank, that blank
//!    line is dropped and the row ends with no code;
//! 3. otherwise everything up to the next comment line that starts a line
//!    becomes the row's code.
//!
//! Apart from the blank lines dropped in phase 2, concatenating every row's
//! documentation and code gives back the input text.

use crate::syntax::CommentSyntax;
use crate::token::{Row, Token};
use std::collections::VecDeque;
use tracing::trace;

/// Split tokens into rows, keeping comment markers in the documentation
///
/// # Examples
///
/// ```
/// use gitbrowse_literate::{split_raw, Row, Token};
///
/// let rows = split_raw(vec![
///     Token::comment("# hello"),
///     Token::plain("\nworld\n"),
/// ]);
/// assert_eq!(rows, vec![Row::new("# hello\n", "world\n")]);
/// ```
pub fn split_raw<I>(tokens: I) -> Vec<Row>
where
    I: IntoIterator<Item = Token>,
{
    let mut stream: VecDeque<Token> = tokens
        .into_iter()
        .filter(|token| !token.text().is_empty())
        .collect();
    let mut rows = Vec::new();

    while !stream.is_empty() {
        let mut documentation = String::new();

        while let Some(indented) = leading_comment(&stream) {
            if indented {
                push_next(&mut stream, &mut documentation);
            }
            push_next(&mut stream, &mut documentation);
            if take_newline(&mut stream) {
                documentation.push('\n');
            }
        }

        if !documentation.is_empty() && take_newline(&mut stream) {
            trace!("Dropped blank line after documentation");
            rows.push(Row::new(documentation, String::new()));
            continue;
        }

        let code = take_code(&mut stream);
        let row = Row::new(documentation, code);
        if !row.is_empty() {
            rows.push(row);
        }
    }

    trace!(rows = rows.len(), "Split token stream");
    rows
}

/// Split tokens into rows and strip comment markers from the documentation
///
/// # Examples
///
/// ```
/// use gitbrowse_literate::{split, CommentSyntax, Row, Token};
///
/// let rows = split(
///     vec![
///         Token::comment("# hello"),
///         Token::plain("\nworld\n"),
///         Token::comment("# more"),
///         Token::plain("\n"),
///     ],
///     &CommentSyntax::HASH,
/// );
/// assert_eq!(rows, vec![Row::new("hello\n", "world\n"), Row::new("more\n", "")]);
/// ```
pub fn split<I>(tokens: I, syntax: &CommentSyntax) -> Vec<Row>
where
    I: IntoIterator<Item = Token>,
{
    split_raw(tokens)
        .into_iter()
        .map(|row| Row {
            documentation: syntax.strip(&row.documentation),
            code: row.code,
        })
        .collect()
}

/// Code up to the next comment line that starts a line
fn take_code(stream: &mut VecDeque<Token>) -> String {
    let mut code = String::new();

    loop {
        let at_line_start = code.is_empty() || code.ends_with('\n');
        if at_line_start && leading_comment(stream).is_some() {
            break;
        }

        match stream.pop_front() {
            None => break,
            Some(Token::Plain(text)) => match indentation_start(&text) {
                // Leave the indentation of a following comment line with it
                Some(at) if comment_line_at(stream, 0) => {
                    code.push_str(&text[..at]);
                    stream.push_front(Token::Plain(text[at..].to_string()));
                }
                _ => code.push_str(&text),
            },
            Some(Token::Comment(text)) => code.push_str(&text),
        }
    }

    code
}

/// `Some(indented)` when a comment line starts at the head of the stream
fn leading_comment(stream: &VecDeque<Token>) -> Option<bool> {
    if comment_line_at(stream, 0) {
        return Some(false);
    }
    match stream.front() {
        Some(Token::Plain(text)) if is_indentation(text) && comment_line_at(stream, 1) => Some(true),
        _ => None,
    }
}

fn comment_line_at(stream: &VecDeque<Token>, index: usize) -> bool {
    if !matches!(stream.get(index), Some(Token::Comment(_))) {
        return false;
    }
    match stream.get(index + 1) {
        None => true,
        Some(Token::Plain(text)) => text.starts_with('\n'),
        Some(Token::Comment(_)) => false,
    }
}

fn is_indentation(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c == ' ' || c == '\t')
}

/// Byte offset of trailing indentation that follows the last newline
fn indentation_start(text: &str) -> Option<usize> {
    let at = text.rfind('\n')? + 1;
    is_indentation(&text[at..]).then_some(at)
}

fn push_next(stream: &mut VecDeque<Token>, out: &mut String) {
    if let Some(token) = stream.pop_front() {
        out.push_str(token.text());
    }
}

/// Consume one `\n` from a plain token at the head of the stream
fn take_newline(stream: &mut VecDeque<Token>) -> bool {
    match stream.front_mut() {
        Some(Token::Plain(text)) if text.starts_with('\n') => {
            text.remove(0);
            if text.is_empty() {
                stream.pop_front();
            }
            true
        }
        _ => false,
    }
}
