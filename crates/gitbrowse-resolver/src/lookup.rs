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

//! Unique lookup by name
//!
//! Trees and the branch index are lists in which a name should occur at most
//! once. Duplicates are surfaced instead of silently picking one.

/// Outcome of looking a name up in a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<T> {
    /// Exactly one item has the name
    Found(T),
    /// No item has the name
    NotFound,
    /// Several items share the name (the count is included)
    Ambiguous(usize),
}

impl<T> Lookup<T> {
    /// The found item, if exactly one matched
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(item) => Some(item),
            _ => None,
        }
    }

    /// Map the found item
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lookup<U> {
        match self {
            Lookup::Found(item) => Lookup::Found(f(item)),
            Lookup::NotFound => Lookup::NotFound,
            Lookup::Ambiguous(count) => Lookup::Ambiguous(count),
        }
    }
}

/// Look up the single item of `items` whose key equals `wanted`
///
/// Comparison is exact and case-sensitive.
///
/// # Examples
///
/// ```
/// use gitbrowse_resolver::{lookup_unique, Lookup};
///
/// let names = ["a", "b", "b"];
/// assert_eq!(lookup_unique(&names, |n| *n, "a"), Lookup::Found(&"a"));
/// assert_eq!(lookup_unique(&names, |n| *n, "b"), Lookup::Ambiguous(2));
/// assert_eq!(lookup_unique(&names, |n| *n, "c"), Lookup::NotFound);
/// ```
pub fn lookup_unique<'a, T, F>(items: &'a [T], key: F, wanted: &str) -> Lookup<&'a T>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut matches = items.iter().filter(|item| key(*item) == wanted);
    match (matches.next(), matches.count()) {
        (None, _) => Lookup::NotFound,
        (Some(item), 0) => Lookup::Found(item),
        (Some(_), rest) => Lookup::Ambiguous(rest + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Entry {
        name: &'static str,
        value: u32,
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry { name: "README", value: 1 },
            Entry { name: "src", value: 2 },
            Entry { name: "dup", value: 3 },
            Entry { name: "dup", value: 4 },
            Entry { name: "dup", value: 5 },
        ]
    }

    #[test]
    fn test_found() {
        let entries = entries();
        let found = lookup_unique(&entries, |e| e.name, "src").found().unwrap();
        assert_eq!(found.value, 2);
    }

    #[test]
    fn test_case_sensitive() {
        let entries = entries();
        assert_eq!(lookup_unique(&entries, |e| e.name, "readme"), Lookup::NotFound);
    }

    #[test]
    fn test_ambiguous_counts_all_matches() {
        let entries = entries();
        assert_eq!(lookup_unique(&entries, |e| e.name, "dup"), Lookup::Ambiguous(3));
    }

    #[test]
    fn test_empty_list() {
        let entries: Vec<Entry> = Vec::new();
        assert_eq!(lookup_unique(&entries, |e| e.name, "x"), Lookup::NotFound);
    }

    #[test]
    fn test_map() {
        let entries = entries();
        let value = lookup_unique(&entries, |e| e.name, "README").map(|e| e.value);
        assert_eq!(value, Lookup::Found(1));
        assert_eq!(Lookup::<u32>::Ambiguous(2).map(|v| v + 1), Lookup::Ambiguous(2));
    }
}
