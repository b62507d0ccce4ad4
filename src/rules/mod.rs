//! Ordered rule tables.
//!
//! A [`RuleList`] holds `(pattern, replacement)` pairs with the most recently
//! registered rule first. Application scans the list in order and applies the
//! first rule whose pattern matches, exactly once.

mod acronyms;
mod inflections;

pub use acronyms::Acronyms;
pub use inflections::{Inflections, Scope};

use std::fmt;

use regex::Regex;

use crate::error::{RuleError, RuleResult};

/// What a rule matches against.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Plain substring; the first occurrence is replaced verbatim.
    Literal(String),
    /// Regular expression; the first match is replaced and the replacement
    /// may reference captures (`$1`, `${1}`, `$name`).
    Regex(Regex),
}

impl Pattern {
    /// Compile a regex pattern.
    pub fn regex(source: &str) -> RuleResult<Self> {
        Regex::new(source)
            .map(Pattern::Regex)
            .map_err(|err| RuleError::InvalidPattern {
                pattern: source.to_string(),
                message: err.to_string(),
            })
    }

    /// Parse the textual rule notation used by config files.
    ///
    /// `/source/flags` is a regex (flags `i`, `m`, `s`, `x` become inline
    /// flags); anything else is a literal.
    pub fn parse(text: &str) -> RuleResult<Self> {
        let Some(body) = text.strip_prefix('/') else {
            return Ok(Pattern::Literal(text.to_string()));
        };
        let Some(end) = body.rfind('/') else {
            return Ok(Pattern::Literal(text.to_string()));
        };

        let (source, flags) = (&body[..end], &body[end + 1..]);
        if let Some(flag) = flags.chars().find(|f| !matches!(f, 'i' | 'm' | 's' | 'x')) {
            return Err(RuleError::UnsupportedFlag {
                pattern: text.to_string(),
                flag,
            });
        }

        if flags.is_empty() {
            Self::regex(source)
        } else {
            Self::regex(&format!("(?{flags}){source}"))
        }
    }

    /// The literal text, if this is a literal pattern.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Pattern::Literal(text) => Some(text),
            Pattern::Regex(_) => None,
        }
    }

    /// Check whether the pattern occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Pattern::Literal(literal) => text.contains(literal.as_str()),
            Pattern::Regex(regex) => regex.is_match(text),
        }
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Pattern::Literal(text.to_string())
    }
}

impl From<String> for Pattern {
    fn from(text: String) -> Self {
        Pattern::Literal(text)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Pattern::Regex(regex)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(text) => write!(f, "{:?}", text),
            Pattern::Regex(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

/// A single pattern → replacement pair.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Pattern,
    replacement: String,
}

impl Rule {
    /// Create a rule. Numbered capture references in regex replacements are
    /// normalized to the braced form so `$1ies` reads as capture 1 followed
    /// by `ies`.
    pub fn new(pattern: impl Into<Pattern>, replacement: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let replacement = replacement.into();
        let replacement = match pattern {
            Pattern::Regex(_) => normalize_template(&replacement),
            Pattern::Literal(_) => replacement,
        };
        Self {
            pattern,
            replacement,
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Apply the rule to `text`, or `None` if the pattern does not match.
    pub fn apply(&self, text: &str) -> Option<String> {
        match &self.pattern {
            Pattern::Literal(literal) => text
                .contains(literal.as_str())
                .then(|| text.replacen(literal.as_str(), &self.replacement, 1)),
            Pattern::Regex(regex) => regex
                .is_match(text)
                .then(|| regex.replacen(text, 1, self.replacement.as_str()).into_owned()),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {:?}", self.pattern, self.replacement)
    }
}

/// Ordered rules, most recently added first.
#[derive(Debug, Clone, Default)]
pub struct RuleList {
    rules: Vec<Rule>,
}

impl RuleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule ahead of every existing rule.
    pub fn prepend(&mut self, rule: Rule) {
        self.rules.insert(0, rule);
    }

    /// Apply the first matching rule, or `None` if nothing matches.
    pub fn apply(&self, text: &str) -> Option<String> {
        self.rules.iter().find_map(|rule| rule.apply(text))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn clear(&mut self) {
        self.rules.clear();
    }
}

impl fmt::Display for RuleList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", rule)?;
        }
        Ok(())
    }
}

/// Rewrite `$N` capture references as `${N}`.
fn normalize_template(template: &str) -> String {
    let mut result = String::with_capacity(template.len() + 4);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }
        match chars.peek() {
            Some('$') => {
                chars.next();
                result.push_str("$$");
            }
            Some(d) if d.is_ascii_digit() => {
                result.push_str("${");
                while let Some(&d) = chars.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    result.push(d);
                    chars.next();
                }
                result.push('}');
            }
            _ => result.push('$'),
        }
    }

    result
}
