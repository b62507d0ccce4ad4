//! Error types for rule construction.
//!
//! Transforms never fail. Errors only surface when a caller builds rules from
//! text (regex sources, scope names, config files).

use thiserror::Error;

/// Result type for rule construction.
pub type RuleResult<T> = Result<T, RuleError>;

/// Errors raised while turning text into inflection rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// A regex rule did not compile.
    #[error("invalid rule pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A `/pattern/flags` literal carried a flag the regex engine has no
    /// inline equivalent for.
    #[error("unsupported regex flag '{flag}' in '{pattern}'")]
    UnsupportedFlag { pattern: String, flag: char },

    /// A clear scope name that is not one of the rule collections.
    #[error("unknown inflection scope: {0}")]
    UnknownScope(String),
}
