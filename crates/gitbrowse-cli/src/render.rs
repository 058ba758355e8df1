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

//! Plain-text rendering of trees, commits and literate rows
//!
//! Everything here returns strings so it can be tested without a terminal;
//! styling is left to the callers.

use console::{measure_text_width, pad_str, Alignment};
use gitbrowse_literate::Row;
use gitbrowse_store::{Commit, Tree};
use std::fmt::Write as _;

const COLUMN_SEPARATOR: &str = " │ ";

/// `mode  basename  sha` table, directories marked with a trailing `/`
pub fn tree_table(tree: &Tree) -> String {
    let names: Vec<String> = tree
        .children
        .iter()
        .map(|entry| {
            if entry.is_dir() {
                format!("{}/", entry.basename)
            } else {
                entry.basename.clone()
            }
        })
        .collect();
    let width = names.iter().map(|n| measure_text_width(n)).max().unwrap_or(0);

    let mut out = String::new();
    for (entry, name) in tree.children.iter().zip(&names) {
        let sha = entry.child.sha.as_deref().unwrap_or("-");
        let _ = writeln!(
            out,
            "{:>6}  {}  {}",
            entry.mode,
            pad_str(name, width, Alignment::Left, None),
            sha
        );
    }
    out
}

/// Commit header in the style of `git show`
pub fn commit_summary(commit: &Commit) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "commit {}", commit.sha);
    let _ = writeln!(out, "tree   {}", commit.tree.id);
    for parent in &commit.parents {
        let _ = writeln!(out, "parent {}", parent.id);
    }
    let _ = writeln!(out, "Author:    {}", commit.author);
    let _ = writeln!(out, "Committer: {}", commit.committer);
    out.push('\n');
    for line in commit.message.lines() {
        let _ = writeln!(out, "    {}", line);
    }
    out
}

/// Two columns: documentation padded (or truncated) to `doc_width`, then code
///
/// Rows are separated by a rule so each piece of prose stays next to the code
/// it introduces.
pub fn literate_columns(rows: &[Row], doc_width: usize) -> String {
    let rule = format!("{}┼{}", "─".repeat(doc_width + 1), "─".repeat(8));

    let mut out = String::new();
    for (index, row) in rows.iter().enumerate() {
        if index > 0 {
            let _ = writeln!(out, "{}", rule);
        }

        let doc: Vec<&str> = row.documentation.lines().collect();
        let code: Vec<&str> = row.code.lines().collect();
        for line in 0..doc.len().max(code.len()) {
            let left = doc.get(line).copied().unwrap_or("");
            let right = code.get(line).copied().unwrap_or("");
            let text = format!(
                "{}{}{}",
                pad_str(left, doc_width, Alignment::Left, Some("…")),
                COLUMN_SEPARATOR,
                right
            );
            let _ = writeln!(out, "{}", text.trim_end());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitbrowse_store::{ObjectId, ObjectRef, TreeEntry};

    fn entry(mode: &str, name: &str, sha: &str) -> TreeEntry {
        TreeEntry::new(mode, name, ObjectRef::with_sha(ObjectId::for_object(sha), sha))
    }

    #[test]
    fn test_tree_table_aligns_names() {
        let tree = Tree {
            sha: "t".to_string(),
            children: vec![
                entry("100644", "README", "aaa"),
                entry("40000", "src", "bbb"),
                entry("100644", "a-long-name.py", "ccc"),
            ],
        };
        assert_eq!(
            tree_table(&tree),
            "100644  README          aaa\n\
             \x2040000  src/            bbb\n\
             100644  a-long-name.py  ccc\n"
        );
    }

    #[test]
    fn test_tree_table_without_sha() {
        let tree = Tree {
            sha: "t".to_string(),
            children: vec![TreeEntry::new("100644", "x", ObjectRef::new(ObjectId::new("x")))],
        };
        assert_eq!(tree_table(&tree), "100644  x  -\n");
    }

    #[test]
    fn test_literate_columns() {
        let rows = vec![
            Row::new("Greets.\n\nTwice.\n", "import sys\n"),
            Row::new("", "print(1)\nprint(2)\n"),
        ];
        let text = literate_columns(&rows, 10);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Greets.    │ import sys");
        assert_eq!(lines[1], "           │");
        assert_eq!(lines[2], "Twice.     │");
        assert!(lines[3].starts_with("───────────┼"));
        assert_eq!(lines[4], "           │ print(1)");
        assert_eq!(lines[5], "           │ print(2)");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_literate_columns_truncates_long_documentation() {
        let rows = vec![Row::new("abcdefghijklmnop\n", "x\n")];
        let text = literate_columns(&rows, 8);
        assert_eq!(measure_text_width(text.lines().next().unwrap_or("")), 8 + 4);
        assert!(text.contains('…'));
    }
}
