//! Human-readable forms.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::registry::Inflector;

static ALNUM_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z0-9]+").unwrap());

/// Start of the text or a run of separators, then a lowercase letter.
static TITLE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[\s¿/]+)([a-z])").unwrap());

/// Options for [`Inflector::humanize_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanizeOptions {
    /// Uppercase the first character of the result.
    pub capitalize: bool,
}

impl Default for HumanizeOptions {
    fn default() -> Self {
        Self { capitalize: true }
    }
}

impl Inflector {
    /// `employee_salary` becomes `Employee salary`; `author_id` becomes
    /// `Author`.
    pub fn humanize(&self, lower_case_and_underscored_word: &str) -> String {
        self.humanize_with(lower_case_and_underscored_word, HumanizeOptions::default())
    }

    /// Humanize with explicit options.
    ///
    /// The first matching human rule is applied, a trailing `_id` is dropped,
    /// underscores become spaces, and every alphanumeric run is lowercased
    /// unless it is the lowercase key of a registered acronym.
    pub fn humanize_with(&self, lower_case_and_underscored_word: &str, options: HumanizeOptions) -> String {
        let inflections = self.default_inflections();
        let word = lower_case_and_underscored_word;

        let mut result = inflections
            .humans()
            .apply(word)
            .unwrap_or_else(|| word.to_string());
        if result.ends_with("_id") {
            result.truncate(result.len() - 3);
        }
        let result = result.replace('_', " ");

        let acronyms = inflections.acronyms();
        let mut result = ALNUM_RUN
            .replace_all(&result, |caps: &Captures| {
                acronyms
                    .get(&caps[0])
                    .map_or_else(|| caps[0].to_lowercase(), str::to_string)
            })
            .into_owned();

        if options.capitalize && result.starts_with(super::is_word_char) {
            result[..1].make_ascii_uppercase();
        }
        result
    }

    /// Capitalize every word of the humanized, underscored form:
    /// `man from the boondocks` becomes `Man From The Boondocks`.
    pub fn titleize(&self, word: &str) -> String {
        let humanized = self.humanize(&self.underscore(word));
        TITLE_BOUNDARY
            .replace_all(&humanized, |caps: &Captures| {
                format!("{}{}", &caps[1], caps[2].to_ascii_uppercase())
            })
            .into_owned()
    }
}
