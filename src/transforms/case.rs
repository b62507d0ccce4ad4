//! Camel case, snake case and their neighbours.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{at_word_boundary, capitalize_str, is_word_char};
use crate::registry::Inflector;
use crate::rules::Acronyms;
use crate::scalar::Scalar;

/// `_segment` or `/segment` following the head of a camelized term.
static SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:_|(/))([A-Za-z0-9]*)").unwrap());

/// An uppercase run followed by a capitalized word: `HTMLTidy`.
static UPPER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z0-9]+)([A-Z][a-z])").unwrap());

/// A lowercase letter or digit followed by an uppercase letter: `aB`.
static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

impl Inflector {
    /// `active_model/errors` becomes `ActiveModel/Errors`.
    ///
    /// Registered acronyms keep their canonical casing, so with `HTML`
    /// registered `nokogiri/html` becomes `Nokogiri/HTML`.
    pub fn camelize(&self, term: &str) -> String {
        self.camelize_with(term, true)
    }

    /// Like [`camelize`](Self::camelize) but with a lowercase first letter:
    /// `active_model` becomes `activeModel`.
    pub fn camelize_lower(&self, term: &str) -> String {
        self.camelize_with(term, false)
    }

    pub fn camelize_with(&self, term: &str, uppercase_first_letter: bool) -> String {
        let acronyms = self.default_inflections().acronyms();

        let head = if uppercase_first_letter {
            let end = term
                .find(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
                .unwrap_or(term.len());
            let (lead, rest) = term.split_at(end);
            let lead = acronyms
                .get(lead)
                .map_or_else(|| capitalize_str(lead), str::to_string);
            lead + rest
        } else {
            let end = acronyms
                .match_at(term, 0, |end| {
                    at_word_boundary(term, end)
                        || term[end..].starts_with(|c: char| c.is_ascii_uppercase() || c == '_')
                })
                .or_else(|| {
                    term.chars()
                        .next()
                        .filter(|c| is_word_char(*c))
                        .map(char::len_utf8)
                });
            match end {
                Some(end) => term[..end].to_lowercase() + &term[end..],
                None => term.to_string(),
            }
        };

        SEGMENT
            .replace_all(&head, |caps: &Captures| {
                let slash = caps.get(1).map_or("", |m| m.as_str());
                let segment = &caps[2];
                let segment = acronyms
                    .get(segment)
                    .map_or_else(|| capitalize_str(segment), str::to_string);
                format!("{slash}{segment}")
            })
            .into_owned()
    }

    /// `ActiveModel::Errors`-style camel case to snake case:
    /// `ActiveModel` becomes `active_model`, `SSLError` becomes `ssl_error`
    /// when `SSL` is a registered acronym.
    pub fn underscore(&self, camel_cased_word: &str) -> String {
        let acronyms = self.default_inflections().acronyms();

        let word = split_acronyms(camel_cased_word, acronyms);
        let word = UPPER_RUN.replace_all(&word, "${1}_${2}");
        let word = LOWER_UPPER.replace_all(&word, "${1}_${2}");
        word.replace('-', "_").to_lowercase()
    }

    /// Underscores to dashes: `puni_puni` becomes `puni-puni`.
    pub fn dasherize(&self, underscored_word: &str) -> String {
        underscored_word.replace('_', "-")
    }

    /// Uppercase the first character of the displayed value; the rest is left
    /// as is. An absent value yields the empty string.
    pub fn capitalize<'a>(&self, value: impl Into<Scalar<'a>>) -> String {
        capitalize_str(&value.into().to_string())
    }

    /// Screaming snake case: `bankAccount` and `Bank Account` both become
    /// `BANK_ACCOUNT`.
    pub fn constantify(&self, word: &str) -> String {
        let upper = self.underscore(word).to_uppercase();
        WHITESPACE.replace_all(&upper, "_").into_owned()
    }
}

/// Lowercase every acronym and separate it from a preceding letter or digit
/// with an underscore.
///
/// An acronym only counts when it ends at a word boundary or before a
/// character that is not a lowercase letter, so `RoRails` keeps its `RoR`.
/// Only the first character of the word may start an acronym without a
/// preceding letter or digit.
fn split_acronyms(word: &str, acronyms: &Acronyms) -> String {
    if !acronyms.occurs_in(word) {
        return word.to_string();
    }

    let accept = |end: usize| {
        at_word_boundary(word, end) || word[end..].chars().next().is_some_and(|c| !c.is_ascii_lowercase())
    };

    let mut out = String::with_capacity(word.len() + 8);
    let mut pos = 0;
    while let Some(c) = word[pos..].chars().next() {
        let next = pos + c.len_utf8();

        if c.is_ascii_alphanumeric() {
            if let Some(end) = acronyms.match_at(word, next, accept) {
                out.push(c);
                out.push('_');
                out.push_str(&word[next..end].to_lowercase());
                pos = end;
                continue;
            }
        }

        if pos == 0 {
            if let Some(end) = acronyms.match_at(word, 0, accept) {
                out.push_str(&word[..end].to_lowercase());
                pos = end;
                continue;
            }
        }

        out.push(c);
        pos = next;
    }
    out
}
