//! Locale registry.
//!
//! An [`Inflector`] owns one [`Inflections`] rule set and one
//! [`Transliterator`] per locale. Lookups through `&self` never create
//! entries: an unregistered locale reads as an empty rule set and the default
//! transliteration table. Mutable access creates the locale on first use.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

use crate::defaults::seed_defaults;
use crate::rules::Inflections;
use crate::transliterate::Transliterator;

/// Locale used when a caller does not name one.
pub const DEFAULT_LOCALE: &str = "en";

static EMPTY_INFLECTIONS: LazyLock<Inflections> = LazyLock::new(Inflections::default);
static DEFAULT_TRANSLITERATOR: LazyLock<Transliterator> = LazyLock::new(Transliterator::new);

/// Caller-owned registry of per-locale rules; also the entry point for every
/// transform (see the `transforms` module).
#[derive(Debug, Clone)]
pub struct Inflector {
    default_locale: String,
    inflections: HashMap<String, Inflections>,
    transliterations: HashMap<String, Transliterator>,
}

impl Default for Inflector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflector {
    /// A registry seeded with the built-in English rules.
    pub fn new() -> Self {
        let mut inflector = Self::empty();
        seed_defaults(&mut inflector);
        inflector
    }

    /// A registry with no rules for any locale.
    pub fn empty() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            inflections: HashMap::new(),
            transliterations: HashMap::new(),
        }
    }

    /// Use `locale` whenever a transform is called without one.
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn set_default_locale(&mut self, locale: impl Into<String>) {
        self.default_locale = locale.into();
    }

    /// Rules for `locale`; an empty set if the locale was never registered.
    pub fn inflections(&self, locale: &str) -> &Inflections {
        self.inflections.get(locale).unwrap_or(&*EMPTY_INFLECTIONS)
    }

    /// Mutable rules for `locale`, created empty on first access.
    pub fn inflections_mut(&mut self, locale: &str) -> &mut Inflections {
        self.inflections.entry(locale.to_string()).or_insert_with(|| {
            debug!(locale, "creating inflection rule set");
            Inflections::default()
        })
    }

    /// Run `f` against the rules of `locale`.
    pub fn configure<F>(&mut self, locale: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Inflections),
    {
        f(self.inflections_mut(locale));
        self
    }

    /// Transliteration table for `locale`; the built-in table if never registered.
    pub fn transliterations(&self, locale: &str) -> &Transliterator {
        self.transliterations
            .get(locale)
            .unwrap_or(&*DEFAULT_TRANSLITERATOR)
    }

    /// Mutable transliteration table for `locale`, seeded with the built-in
    /// approximations on first access.
    pub fn transliterations_mut(&mut self, locale: &str) -> &mut Transliterator {
        self.transliterations
            .entry(locale.to_string())
            .or_insert_with(|| {
                debug!(locale, "creating transliteration table");
                Transliterator::new()
            })
    }

    /// Run `f` against the transliteration table of `locale`.
    pub fn configure_transliterations<F>(&mut self, locale: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Transliterator),
    {
        f(self.transliterations_mut(locale));
        self
    }

    /// Locales with a registered rule set, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.inflections.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Rules of the default locale.
    pub(crate) fn default_inflections(&self) -> &Inflections {
        self.inflections(&self.default_locale)
    }
}
