//! Per-locale inflection rule set.

use std::fmt;
use std::str::FromStr;

use tracing::{trace, warn};

use super::{Acronyms, Pattern, Rule, RuleList};
use crate::error::RuleError;

/// Rule collection targeted by [`Inflections::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    Plurals,
    Singulars,
    Uncountables,
    Humans,
    /// Only cleared when named explicitly; `All` leaves acronyms alone.
    Acronyms,
    /// Plurals, singulars, uncountables and humans.
    #[default]
    All,
}

impl FromStr for Scope {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plurals" => Ok(Scope::Plurals),
            "singulars" => Ok(Scope::Singulars),
            "uncountables" => Ok(Scope::Uncountables),
            "humans" => Ok(Scope::Humans),
            "acronyms" => Ok(Scope::Acronyms),
            "all" => Ok(Scope::All),
            other => Err(RuleError::UnknownScope(other.to_string())),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scope::Plurals => "plurals",
            Scope::Singulars => "singulars",
            Scope::Uncountables => "uncountables",
            Scope::Humans => "humans",
            Scope::Acronyms => "acronyms",
            Scope::All => "all",
        };
        f.write_str(name)
    }
}

/// The inflection rules of one locale.
///
/// Mutators return `&mut Self` so registrations can be chained:
///
/// ```
/// use inflections::rules::Inflections;
///
/// let mut inflect = Inflections::default();
/// inflect
///     .plural("luz", "luces")
///     .irregular("el", "los")
///     .uncountable(["crisis"]);
/// assert_eq!(inflect.plurals().len(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Inflections {
    plurals: RuleList,
    singulars: RuleList,
    uncountables: Vec<String>,
    humans: RuleList,
    acronyms: Acronyms,
}

impl Inflections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plurals(&self) -> &RuleList {
        &self.plurals
    }

    pub fn singulars(&self) -> &RuleList {
        &self.singulars
    }

    pub fn uncountables(&self) -> &[String] {
        &self.uncountables
    }

    pub fn humans(&self) -> &RuleList {
        &self.humans
    }

    pub fn acronyms(&self) -> &Acronyms {
        &self.acronyms
    }

    /// Exact membership test against the uncountable list.
    pub fn is_uncountable(&self, word: &str) -> bool {
        self.uncountables.iter().any(|w| w == word)
    }

    /// Register a pluralization rule ahead of all existing ones.
    ///
    /// A literal pattern and the replacement text stop being uncountable.
    pub fn plural(&mut self, pattern: impl Into<Pattern>, replacement: impl Into<String>) -> &mut Self {
        let rule = Rule::new(pattern, replacement);
        self.release_uncountables(&rule);
        trace!(%rule, "plural rule");
        self.plurals.prepend(rule);
        self
    }

    /// Register a singularization rule ahead of all existing ones.
    ///
    /// A literal pattern and the replacement text stop being uncountable.
    pub fn singular(&mut self, pattern: impl Into<Pattern>, replacement: impl Into<String>) -> &mut Self {
        let rule = Rule::new(pattern, replacement);
        self.release_uncountables(&rule);
        trace!(%rule, "singular rule");
        self.singulars.prepend(rule);
        self
    }

    /// Register an irregular singular/plural pair.
    ///
    /// Synthesizes plural and singular rules for both spellings. When the
    /// words share a first letter (ignoring case) that letter is captured so
    /// the input's capitalization carries through; otherwise separate rules
    /// are made for an upper- and a lowercase first letter, with the rest of
    /// the word matched case-insensitively.
    pub fn irregular(&mut self, singular: &str, plural: &str) -> &mut Self {
        remove_word(&mut self.uncountables, singular);
        remove_word(&mut self.uncountables, plural);

        let (Some(s0), Some(p0)) = (singular.chars().next(), plural.chars().next()) else {
            warn!(singular, plural, "ignoring irregular pair with an empty word");
            return self;
        };
        let s_rest = &singular[s0.len_utf8()..];
        let p_rest = &plural[p0.len_utf8()..];

        let Some((plurals, singulars)) = irregular_rules(s0, s_rest, p0, p_rest) else {
            warn!(singular, plural, "irregular pair produced an invalid pattern");
            return self;
        };

        for (pattern, replacement) in plurals {
            self.plural(pattern, replacement);
        }
        for (pattern, replacement) in singulars {
            self.singular(pattern, replacement);
        }
        self
    }

    /// Mark words as uncountable. Words are stored verbatim.
    pub fn uncountable<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.uncountables.extend(words.into_iter().map(Into::into));
        self
    }

    /// Register a humanize override ahead of all existing ones.
    pub fn human(&mut self, pattern: impl Into<Pattern>, replacement: impl Into<String>) -> &mut Self {
        let rule = Rule::new(pattern, replacement);
        trace!(%rule, "human rule");
        self.humans.prepend(rule);
        self
    }

    /// Register an acronym by its canonical spelling.
    pub fn acronym(&mut self, word: &str) -> &mut Self {
        if word.is_empty() {
            warn!("ignoring empty acronym");
            return self;
        }
        self.acronyms.insert(word);
        self
    }

    /// Empty one collection (or all rule collections) in place.
    pub fn clear(&mut self, scope: Scope) -> &mut Self {
        trace!(%scope, "clearing inflections");
        match scope {
            Scope::Plurals => self.plurals.clear(),
            Scope::Singulars => self.singulars.clear(),
            Scope::Uncountables => self.uncountables.clear(),
            Scope::Humans => self.humans.clear(),
            Scope::Acronyms => self.acronyms.clear(),
            Scope::All => {
                self.plurals.clear();
                self.singulars.clear();
                self.uncountables.clear();
                self.humans.clear();
            }
        }
        self
    }

    /// Same as `clear(Scope::All)`.
    pub fn clear_all(&mut self) -> &mut Self {
        self.clear(Scope::All)
    }

    fn release_uncountables(&mut self, rule: &Rule) {
        if let Some(literal) = rule.pattern().as_literal() {
            remove_word(&mut self.uncountables, literal);
        }
        remove_word(&mut self.uncountables, rule.replacement());
    }
}

type RulePairs = Vec<(Pattern, String)>;

/// Build the (plural, singular) rules for an irregular pair, in registration order.
fn irregular_rules(s0: char, s_rest: &str, p0: char, p_rest: &str) -> Option<(RulePairs, RulePairs)> {
    let (s_lit, p_lit) = (template_literal(s_rest), template_literal(p_rest));

    if upper(s0) == upper(p0) {
        let s_pattern = Pattern::regex(&format!(
            "(?i)({}){}$",
            regex::escape(&s0.to_string()),
            regex::escape(s_rest)
        ))
        .ok()?;
        let p_pattern = Pattern::regex(&format!(
            "(?i)({}){}$",
            regex::escape(&p0.to_string()),
            regex::escape(p_rest)
        ))
        .ok()?;

        let plurals = vec![
            (s_pattern.clone(), format!("${{1}}{p_lit}")),
            (p_pattern.clone(), format!("${{1}}{p_lit}")),
        ];
        let singulars = vec![
            (s_pattern, format!("${{1}}{s_lit}")),
            (p_pattern, format!("${{1}}{s_lit}")),
        ];
        return Some((plurals, singulars));
    }

    let (s_ic, p_ic) = (either_case(s_rest), either_case(p_rest));
    let head = |c: String, rest_ic: &str| Pattern::regex(&format!("{}{}$", regex::escape(&c), rest_ic));

    let s_upper = head(upper(s0), &s_ic).ok()?;
    let s_lower = head(lower(s0), &s_ic).ok()?;
    let p_upper = head(upper(p0), &p_ic).ok()?;
    let p_lower = head(lower(p0), &p_ic).ok()?;

    let plurals = vec![
        (s_upper.clone(), format!("{}{p_lit}", template_literal(&upper(p0)))),
        (s_lower.clone(), format!("{}{p_lit}", template_literal(&lower(p0)))),
        (p_upper.clone(), format!("{}{p_lit}", template_literal(&upper(p0)))),
        (p_lower.clone(), format!("{}{p_lit}", template_literal(&lower(p0)))),
    ];
    let singulars = vec![
        (s_upper, format!("{}{s_lit}", template_literal(&upper(s0)))),
        (s_lower, format!("{}{s_lit}", template_literal(&lower(s0)))),
        (p_upper, format!("{}{s_lit}", template_literal(&upper(s0)))),
        (p_lower, format!("{}{s_lit}", template_literal(&lower(s0)))),
    ];
    Some((plurals, singulars))
}

/// `(?:X|x)` per character, so each letter matches in either case.
fn either_case(text: &str) -> String {
    text.chars()
        .map(|c| {
            format!(
                "(?:{}|{})",
                regex::escape(&upper(c)),
                regex::escape(&lower(c))
            )
        })
        .collect()
}

fn upper(c: char) -> String {
    c.to_uppercase().collect()
}

fn lower(c: char) -> String {
    c.to_lowercase().collect()
}

/// Escape `$` so text survives regex replacement expansion.
fn template_literal(text: &str) -> String {
    text.replace('$', "$$")
}

fn remove_word(words: &mut Vec<String>, word: &str) {
    words.retain(|w| w != word);
}
