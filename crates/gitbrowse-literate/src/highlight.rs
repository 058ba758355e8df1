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

//! Turning source text into a token stream

use crate::syntax::CommentSyntax;
use crate::token::Token;

/// Produces the token stream the splitter consumes
///
/// Implementations must be lossless: the token texts concatenated in order
/// equal `source`.
pub trait Highlighter {
    /// Tokenize `source`
    fn highlight(&self, source: &str, syntax: &CommentSyntax) -> Vec<Token>;
}

/// Recognises line comments only
///
/// A comment runs from the marker to the end of its line (the newline is
/// left in the following plain token). Markers inside single- or
/// double-quoted strings on the same line are ignored; strings do not span
/// lines and `\` escapes the next character.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCommentHighlighter;

impl Highlighter for LineCommentHighlighter {
    fn highlight(&self, source: &str, syntax: &CommentSyntax) -> Vec<Token> {
        let Some(marker) = syntax.marker() else {
            return plain_only(source);
        };

        let mut tokens = Vec::new();
        let mut plain_start = 0;
        let mut quote: Option<char> = None;
        let mut escaped = false;
        let mut chars = source.char_indices();

        while let Some((at, ch)) = chars.next() {
            if let Some(open) = quote {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == open || ch == '\n' {
                    quote = None;
                }
                continue;
            }

            if ch == '"' || ch == '\'' {
                quote = Some(ch);
            } else if source[at..].starts_with(marker) {
                let end = source[at..].find('\n').map_or(source.len(), |n| at + n);
                if plain_start < at {
                    tokens.push(Token::plain(&source[plain_start..at]));
                }
                tokens.push(Token::comment(&source[at..end]));
                plain_start = end;
                // Resume scanning at the newline
                while chars.clone().next().is_some_and(|(next, _)| next < end) {
                    chars.next();
                }
            }
        }

        if plain_start < source.len() {
            tokens.push(Token::plain(&source[plain_start..]));
        }
        tokens
    }
}

fn plain_only(source: &str) -> Vec<Token> {
    if source.is_empty() {
        Vec::new()
    } else {
        vec![Token::plain(source)]
    }
}
