//! Transliteration tables.
//!
//! Each locale owns a [`Transliterator`] mapping source characters (or short
//! substrings) to ASCII approximations. Every table starts from the built-in
//! Latin approximations; callers add or override entries with
//! [`Transliterator::approximate`].

mod approximations;

use std::collections::BTreeMap;

use approximations::DEFAULT_APPROXIMATIONS;

/// Replacement used for unmapped non-ASCII characters unless a caller picks one.
pub const DEFAULT_REPLACEMENT: &str = "?";

/// Locale-scoped mapping from source text to ASCII approximations.
#[derive(Debug, Clone)]
pub struct Transliterator {
    approximations: BTreeMap<String, String>,
    /// Length in chars of the longest source key.
    longest_key: usize,
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Transliterator {
    /// A table seeded with the built-in approximations.
    pub fn new() -> Self {
        let mut table = Self::empty();
        for (from, to) in DEFAULT_APPROXIMATIONS {
            table.approximate(from, to);
        }
        table
    }

    /// A table with no approximations at all.
    pub fn empty() -> Self {
        Self {
            approximations: BTreeMap::new(),
            longest_key: 0,
        }
    }

    /// Add or override the approximation for `from`.
    pub fn approximate(&mut self, from: &str, to: &str) -> &mut Self {
        if from.is_empty() {
            tracing::warn!(to, "ignoring approximation for empty source text");
            return self;
        }
        self.longest_key = self.longest_key.max(from.chars().count());
        self.approximations.insert(from.to_string(), to.to_string());
        self
    }

    pub fn get(&self, from: &str) -> Option<&str> {
        self.approximations.get(from).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.approximations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.approximations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.approximations
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace mapped text with its approximation, longest source first.
    ///
    /// Unmapped non-ASCII characters become `replacement`; ASCII passes through.
    pub fn transliterate(&self, text: &str, replacement: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(c) = rest.chars().next() {
            if let Some((len, to)) = self.longest_match(rest) {
                result.push_str(to);
                rest = &rest[len..];
                continue;
            }

            if c.is_ascii() {
                result.push(c);
            } else {
                result.push_str(replacement);
            }
            rest = &rest[c.len_utf8()..];
        }

        result
    }

    fn longest_match(&self, text: &str) -> Option<(usize, &str)> {
        if self.longest_key == 0 {
            return None;
        }

        let ends: Vec<usize> = text
            .char_indices()
            .skip(1)
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .take(self.longest_key)
            .collect();

        ends.iter().rev().find_map(|&end| {
            self.approximations
                .get(&text[..end])
                .map(|to| (end, to.as_str()))
        })
    }
}
