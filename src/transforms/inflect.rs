//! Pluralization and singularization.

use super::is_word_char;
use crate::registry::Inflector;
use crate::rules::RuleList;

impl Inflector {
    /// Plural form of `word` in the default locale.
    pub fn pluralize(&self, word: &str) -> String {
        self.pluralize_in(word, self.default_locale())
    }

    /// Plural form of `word` using the rules of `locale`.
    pub fn pluralize_in(&self, word: &str, locale: &str) -> String {
        let inflections = self.inflections(locale);
        apply_inflections(word, inflections.plurals(), inflections.uncountables())
    }

    /// Singular form of `word` in the default locale.
    pub fn singularize(&self, word: &str) -> String {
        self.singularize_in(word, self.default_locale())
    }

    /// Singular form of `word` using the rules of `locale`.
    pub fn singularize_in(&self, word: &str, locale: &str) -> String {
        let inflections = self.inflections(locale);
        apply_inflections(word, inflections.singulars(), inflections.uncountables())
    }
}

/// Apply the first matching rule of `rules` to `word`.
///
/// The word is returned unchanged when it is empty, when its trailing word
/// token (lowercased) is uncountable, or when no rule matches. Only the whole
/// trailing token is compared, so an uncountable `ors` leaves `sponsors`
/// alone.
pub fn apply_inflections(word: &str, rules: &RuleList, uncountables: &[String]) -> String {
    if word.is_empty() {
        return String::new();
    }

    if let Some(token) = trailing_token(word) {
        let token = token.to_ascii_lowercase();
        if uncountables.iter().any(|w| *w == token) {
            return word.to_string();
        }
    }

    rules.apply(word).unwrap_or_else(|| word.to_string())
}

/// Trailing run of word characters, if any.
fn trailing_token(word: &str) -> Option<&str> {
    let head = word.trim_end_matches(is_word_char);
    let token = &word[head.len()..];
    (!token.is_empty()).then_some(token)
}
