//! Transliteration and URL slugs.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::registry::Inflector;
use crate::transliterate::DEFAULT_REPLACEMENT;

/// Anything that may not appear in a slug.
static UNSAFE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9\-_]+").unwrap());

/// Options for [`Inflector::transliterate_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransliterateOptions<'a> {
    /// Table to use; the inflector's default locale when `None`.
    pub locale: Option<&'a str>,
    /// Substitute for characters with no approximation.
    pub replacement: &'a str,
}

impl Default for TransliterateOptions<'_> {
    fn default() -> Self {
        Self {
            locale: None,
            replacement: DEFAULT_REPLACEMENT,
        }
    }
}

/// Options for [`Inflector::parameterize_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterizeOptions<'a> {
    /// Joins the words of the slug. `None` behaves like `Some("")`.
    pub separator: Option<&'a str>,
    /// Transliteration table to use; the inflector's default locale when `None`.
    pub locale: Option<&'a str>,
    /// Keep the original letter case instead of lowercasing.
    pub preserve_case: bool,
}

impl Default for ParameterizeOptions<'_> {
    fn default() -> Self {
        Self {
            separator: Some("-"),
            locale: None,
            preserve_case: false,
        }
    }
}

impl Inflector {
    /// Replace non-ASCII characters with ASCII approximations; characters
    /// without one become `?`.
    pub fn transliterate(&self, text: &str) -> String {
        self.transliterate_with(text, TransliterateOptions::default())
    }

    pub fn transliterate_with(&self, text: &str, options: TransliterateOptions<'_>) -> String {
        let locale = options.locale.unwrap_or(self.default_locale());
        self.transliterations(locale)
            .transliterate(text, options.replacement)
    }

    /// URL-safe slug: `Donald E. Knuth` becomes `donald-e-knuth`.
    pub fn parameterize(&self, text: &str) -> String {
        self.parameterize_with(text, ParameterizeOptions::default())
    }

    /// Slug with explicit options.
    ///
    /// The text is transliterated, every run of characters outside
    /// `[A-Za-z0-9_-]` becomes one separator, repeated separators collapse to
    /// one, and separators at either end are removed.
    pub fn parameterize_with(&self, text: &str, options: ParameterizeOptions<'_>) -> String {
        let separator = options.separator.unwrap_or("");
        let transliterated = self.transliterate_with(
            text,
            TransliterateOptions {
                locale: options.locale,
                ..Default::default()
            },
        );

        let mut slug = UNSAFE_RUN
            .replace_all(&transliterated, NoExpand(separator))
            .into_owned();

        if !separator.is_empty() {
            slug = squeeze_separator(&slug, separator);
        }

        if options.preserve_case {
            slug
        } else {
            slug.to_lowercase()
        }
    }
}

/// Collapse repeated `separator`s and strip them from both ends.
fn squeeze_separator(slug: &str, separator: &str) -> String {
    let doubled = separator.repeat(2);
    let mut slug = slug.to_string();
    while slug.contains(&doubled) {
        slug = slug.replace(&doubled, separator);
    }

    let slug = slug.strip_prefix(separator).unwrap_or(&slug);
    let slug = slug.strip_suffix(separator).unwrap_or(slug);
    slug.to_string()
}
