//! Process-wide inflector.
//!
//! A single [`Inflector`] seeded with the built-in rules lives behind a
//! `RwLock`. The free functions here read it, as do [`with_inflections`] and
//! [`with_transliterations`]; [`inflections`], [`default_inflections`] and
//! [`transliterations`] mutate it.
//!
//! ```
//! inflections::global::inflections("en", |inflect| {
//!     inflect.irregular("octopus", "octopodes");
//! });
//! assert_eq!(inflections::global::pluralize("octopus"), "octopodes");
//! ```
//!
//! The mutator closures run while the write lock is held. Calling any other
//! function of this module from inside one deadlocks.

use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::registry::Inflector;
use crate::rules::Inflections;
use crate::scalar::Scalar;
use crate::transforms::{HumanizeOptions, ParameterizeOptions, TransliterateOptions};
use crate::transliterate::Transliterator;

static GLOBAL: LazyLock<RwLock<Inflector>> = LazyLock::new(|| RwLock::new(Inflector::new()));

fn read() -> RwLockReadGuard<'static, Inflector> {
    GLOBAL.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Inflector> {
    GLOBAL.write().unwrap_or_else(PoisonError::into_inner)
}

/// Mutate the rules of `locale`, creating it if needed.
pub fn inflections<R>(locale: &str, f: impl FnOnce(&mut Inflections) -> R) -> R {
    f(write().inflections_mut(locale))
}

/// Mutate the rules of the default locale.
pub fn default_inflections<R>(f: impl FnOnce(&mut Inflections) -> R) -> R {
    let mut inflector = write();
    let locale = inflector.default_locale().to_string();
    f(inflector.inflections_mut(&locale))
}

/// Read the rules of `locale`, or of the default locale when `None`.
pub fn with_inflections<R>(locale: Option<&str>, f: impl FnOnce(&Inflections) -> R) -> R {
    let inflector = read();
    let locale = locale.unwrap_or(inflector.default_locale());
    f(inflector.inflections(locale))
}

/// Read the transliteration table of `locale`, or of the default locale when `None`.
pub fn with_transliterations<R>(locale: Option<&str>, f: impl FnOnce(&Transliterator) -> R) -> R {
    let inflector = read();
    let locale = locale.unwrap_or(inflector.default_locale());
    f(inflector.transliterations(locale))
}

/// Locale used by the free functions that take none.
pub fn default_locale() -> String {
    read().default_locale().to_string()
}

/// Mutate the transliteration table of `locale`, creating it if needed.
pub fn transliterations<R>(locale: &str, f: impl FnOnce(&mut Transliterator) -> R) -> R {
    f(write().transliterations_mut(locale))
}

/// Replace the process-wide inflector, returning the previous one.
pub fn install(inflector: Inflector) -> Inflector {
    std::mem::replace(&mut *write(), inflector)
}

/// Copy of the current process-wide inflector.
pub fn snapshot() -> Inflector {
    read().clone()
}

macro_rules! delegate {
    ($($(#[$meta:meta])* fn $name:ident($($arg:ident: $ty:ty),*) -> $ret:ty;)*) => {
        $(
            $(#[$meta])*
            pub fn $name($($arg: $ty),*) -> $ret {
                read().$name($($arg),*)
            }
        )*
    };
}

delegate! {
    /// See [`Inflector::pluralize`].
    fn pluralize(word: &str) -> String;
    /// See [`Inflector::pluralize_in`].
    fn pluralize_in(word: &str, locale: &str) -> String;
    /// See [`Inflector::singularize`].
    fn singularize(word: &str) -> String;
    /// See [`Inflector::singularize_in`].
    fn singularize_in(word: &str, locale: &str) -> String;
    /// See [`Inflector::camelize`].
    fn camelize(term: &str) -> String;
    /// See [`Inflector::camelize_lower`].
    fn camelize_lower(term: &str) -> String;
    /// See [`Inflector::underscore`].
    fn underscore(camel_cased_word: &str) -> String;
    /// See [`Inflector::humanize`].
    fn humanize(word: &str) -> String;
    /// See [`Inflector::humanize_with`].
    fn humanize_with(word: &str, options: HumanizeOptions) -> String;
    /// See [`Inflector::titleize`].
    fn titleize(word: &str) -> String;
    /// See [`Inflector::tableize`].
    fn tableize(class_name: &str) -> String;
    /// See [`Inflector::classify`].
    fn classify(table_name: &str) -> String;
    /// See [`Inflector::dasherize`].
    fn dasherize(underscored_word: &str) -> String;
    /// See [`Inflector::foreign_key`].
    fn foreign_key(class_name: &str) -> String;
    /// See [`Inflector::foreign_key_with`].
    fn foreign_key_with(class_name: &str, separate_with_underscore: bool) -> String;
    /// See [`Inflector::constantify`].
    fn constantify(word: &str) -> String;
    /// See [`Inflector::transliterate`].
    fn transliterate(text: &str) -> String;
    /// See [`Inflector::transliterate_with`].
    fn transliterate_with(text: &str, options: TransliterateOptions<'_>) -> String;
    /// See [`Inflector::parameterize`].
    fn parameterize(text: &str) -> String;
    /// See [`Inflector::parameterize_with`].
    fn parameterize_with(text: &str, options: ParameterizeOptions<'_>) -> String;
}

/// See [`Inflector::capitalize`].
pub fn capitalize<'a>(value: impl Into<Scalar<'a>>) -> String {
    read().capitalize(value)
}

/// See [`Inflector::ordinal`].
pub fn ordinal<'a>(number: impl Into<Scalar<'a>>) -> &'static str {
    read().ordinal(number)
}

/// See [`Inflector::ordinalize`].
pub fn ordinalize<'a>(number: impl Into<Scalar<'a>>) -> String {
    read().ordinalize(number)
}
