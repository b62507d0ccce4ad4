//! Acronym table and its derived alternation regex.

use regex::Regex;

/// Registered acronyms keyed by their lowercase form.
///
/// Entries keep registration order; re-registering a key replaces the
/// canonical form in place. The alternation regex over all canonical forms is
/// rebuilt whenever the table changes.
#[derive(Debug, Clone, Default)]
pub struct Acronyms {
    entries: Vec<(String, String)>,
    regex: Option<Regex>,
}

impl Acronyms {
    /// Register `word` under its lowercase key and rebuild the regex.
    pub fn insert(&mut self, word: &str) {
        let key = word.to_lowercase();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = word.to_string(),
            None => self.entries.push((key, word.to_string())),
        }
        self.rebuild();
    }

    /// Canonical form for an exact lowercase key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, canonical)| canonical.as_str())
    }

    /// Alternation of every canonical form; `None` when no acronym is registered.
    pub fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }

    /// Check whether any canonical form occurs in `text`.
    pub fn occurs_in(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|regex| regex.is_match(text))
    }

    /// Match a canonical form starting exactly at byte `pos`.
    ///
    /// Alternatives are tried in registration order and the first one for
    /// which `accept(end)` holds wins, mirroring a regex alternation followed
    /// by a lookahead. Returns the end byte offset of the match.
    pub fn match_at(&self, text: &str, pos: usize, accept: impl Fn(usize) -> bool) -> Option<usize> {
        let rest = text.get(pos..)?;
        self.entries
            .iter()
            .filter(|(_, canonical)| rest.starts_with(canonical.as_str()))
            .map(|(_, canonical)| pos + canonical.len())
            .find(|&end| accept(end))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(lowercase key, canonical form)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.regex = None;
    }

    fn rebuild(&mut self) {
        let alternation = self
            .entries
            .iter()
            .map(|(_, canonical)| regex::escape(canonical))
            .collect::<Vec<_>>()
            .join("|");
        // Escaped literals always compile.
        self.regex = Regex::new(&alternation).ok();
        tracing::trace!(acronyms = self.entries.len(), pattern = %alternation, "rebuilt acronym regex");
    }
}
