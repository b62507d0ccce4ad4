//! # Inflections
//!
//! Locale-scoped word inflection: pluralization, singularization, casing,
//! humanizing, ordinals, transliteration and URL slugs.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        Settings (TOML)      /      built-in defaults     │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [apply / seed]
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Inflector (registry)                     │
//! │   locale → Inflections   (plurals, singulars,            │
//! │                           uncountables, humans, acronyms)│
//! │   locale → Transliterator (approximation table)          │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [transforms]
//! ┌─────────────────────────────────────────────────────────┐
//! │  pluralize · singularize · camelize · underscore ·       │
//! │  humanize · titleize · tableize · classify · ordinalize  │
//! │  transliterate · parameterize · constantify · ...        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```
//! use inflections::Inflector;
//!
//! let mut inflector = Inflector::new();
//! assert_eq!(inflector.pluralize("octopus"), "octopi");
//! assert_eq!(inflector.classify("schema.node_children"), "NodeChild");
//!
//! inflector.configure("en", |inflect| {
//!     inflect.acronym("HTML");
//! });
//! assert_eq!(inflector.camelize("nokogiri/html"), "Nokogiri/HTML");
//! ```
//!
//! A process-wide instance is available through [`global`].

pub mod config;
pub mod defaults;
pub mod error;
pub mod global;
pub mod registry;
pub mod rules;
pub mod scalar;
pub mod transforms;
pub mod transliterate;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::config::{LocaleSettings, Settings, SettingsError};
    pub use crate::error::{RuleError, RuleResult};
    pub use crate::registry::{Inflector, DEFAULT_LOCALE};
    pub use crate::rules::{Acronyms, Inflections, Pattern, Rule, RuleList, Scope};
    pub use crate::scalar::Scalar;
    pub use crate::transforms::{HumanizeOptions, ParameterizeOptions, TransliterateOptions};
    pub use crate::transliterate::Transliterator;
}

// Also export at crate root for convenience
pub use error::{RuleError, RuleResult};
pub use registry::{Inflector, DEFAULT_LOCALE};
pub use rules::{Inflections, Pattern, Rule, RuleList, Scope};
pub use scalar::Scalar;
pub use transforms::{HumanizeOptions, ParameterizeOptions, TransliterateOptions};
pub use transliterate::Transliterator;
