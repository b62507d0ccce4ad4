//! Configuration module.
//!
//! Loads extra inflection rules from TOML and registers them on an
//! [`Inflector`](crate::Inflector).

mod settings;

pub use settings::{LocaleSettings, Settings, SettingsError, CONFIG_ENV};
