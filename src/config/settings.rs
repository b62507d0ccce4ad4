//! TOML-based inflection rules.
//!
//! Each `[locales.<id>]` table adds rules to one locale. Patterns written as
//! `/source/flags` are regexes; anything else is a literal.
//!
//! Example configuration:
//! ```toml
//! default_locale = "en"
//!
//! [locales.en]
//! irregulars = [["octopus", "octopodes"]]
//! uncountables = ["feedback"]
//! acronyms = ["API", "HTML"]
//! humans = [["/_cnt$/i", "_count"]]
//!
//! [locales.es]
//! clear_defaults = true
//! plurals = [["/$/", "s"], ["/z$/i", "ces"]]
//! singulars = [["/s$/", ""], ["/es$/", ""]]
//! irregulars = [["el", "los"]]
//!
//! [locales.de.approximations]
//! "ä" = "ae"
//! "ö" = "oe"
//! "ü" = "ue"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::RuleError;
use crate::registry::Inflector;
use crate::rules::Pattern;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "INFLECTIONS_CONFIG";

const LOCAL_CONFIG: &str = "inflections.toml";

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid rule for locale '{locale}': {source}")]
    Rule {
        locale: String,
        #[source]
        source: RuleError,
    },
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Locale used by transforms that are not given one.
    pub default_locale: Option<String>,

    /// Rules keyed by locale.
    pub locales: BTreeMap<String, LocaleSettings>,
}

/// Rules for one locale, registered in the order listed here.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LocaleSettings {
    /// Drop every existing rule of the locale (acronyms excepted) first.
    pub clear_defaults: bool,

    /// `[pattern, replacement]` pairs.
    pub plurals: Vec<(String, String)>,

    /// `[pattern, replacement]` pairs.
    pub singulars: Vec<(String, String)>,

    /// `[singular, plural]` pairs.
    pub irregulars: Vec<(String, String)>,

    pub uncountables: Vec<String>,

    /// `[pattern, replacement]` pairs.
    pub humans: Vec<(String, String)>,

    pub acronyms: Vec<String>,

    /// Transliteration overrides, source text to ASCII.
    pub approximations: BTreeMap<String, String>,
}

type CompiledRules = Vec<(Pattern, String)>;

/// A locale's rules with every pattern already compiled.
struct CompiledLocale<'a> {
    locale: &'a str,
    settings: &'a LocaleSettings,
    plurals: CompiledRules,
    singulars: CompiledRules,
    humans: CompiledRules,
}

impl LocaleSettings {
    /// Register every rule on `inflector` under `locale`.
    ///
    /// All patterns are compiled before anything is registered, so an invalid
    /// pattern leaves the locale untouched.
    pub fn apply(&self, locale: &str, inflector: &mut Inflector) -> Result<(), SettingsError> {
        self.compile(locale)?.register(inflector);
        Ok(())
    }

    fn compile<'a>(&'a self, locale: &'a str) -> Result<CompiledLocale<'a>, SettingsError> {
        let compile = |pairs: &[(String, String)]| -> Result<CompiledRules, SettingsError> {
            pairs
                .iter()
                .map(|(pattern, replacement)| {
                    Pattern::parse(pattern)
                        .map(|pattern| (pattern, replacement.clone()))
                        .map_err(|source| SettingsError::Rule {
                            locale: locale.to_string(),
                            source,
                        })
                })
                .collect()
        };

        Ok(CompiledLocale {
            locale,
            settings: self,
            plurals: compile(&self.plurals)?,
            singulars: compile(&self.singulars)?,
            humans: compile(&self.humans)?,
        })
    }
}

impl CompiledLocale<'_> {
    fn register(self, inflector: &mut Inflector) {
        let CompiledLocale {
            locale,
            settings,
            plurals,
            singulars,
            humans,
        } = self;

        inflector.configure(locale, |inflect| {
            if settings.clear_defaults {
                inflect.clear_all();
            }
            for (pattern, replacement) in plurals {
                inflect.plural(pattern, replacement);
            }
            for (pattern, replacement) in singulars {
                inflect.singular(pattern, replacement);
            }
            for (singular, plural) in &settings.irregulars {
                inflect.irregular(singular, plural);
            }
            inflect.uncountable(settings.uncountables.iter().cloned());
            for (pattern, replacement) in humans {
                inflect.human(pattern, replacement);
            }
            for acronym in &settings.acronyms {
                inflect.acronym(acronym);
            }
        });

        if !settings.approximations.is_empty() {
            inflector.configure_transliterations(locale, |table| {
                for (from, to) in &settings.approximations {
                    table.approximate(from, to);
                }
            });
        }

        debug!(
            locale,
            plurals = settings.plurals.len(),
            singulars = settings.singulars.len(),
            irregulars = settings.irregulars.len(),
            uncountables = settings.uncountables.len(),
            humans = settings.humans.len(),
            acronyms = settings.acronyms.len(),
            approximations = settings.approximations.len(),
            "applied configured inflections"
        );
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings = Self::parse(&content)?;
        debug!(path = %path.display(), locales = settings.locales.len(), "loaded inflection settings");
        Ok(settings)
    }

    /// Parse settings from TOML text.
    pub fn parse(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `INFLECTIONS_CONFIG`
    /// 2. `./inflections.toml`
    /// 3. `~/.config/inflections/config.toml`
    ///
    /// Returns the default (empty) settings when no file is found.
    pub fn load() -> Result<Self, SettingsError> {
        let explicit = env::var_os(CONFIG_ENV).map(PathBuf::from);
        match Self::locate(explicit, Path::new(LOCAL_CONFIG), dirs::config_dir()) {
            Some(path) => Self::from_file(path),
            None => {
                debug!("no inflection settings found, using defaults");
                Ok(Settings::default())
            }
        }
    }

    /// First config file in search order: `explicit`, then `local`, then
    /// `inflections/config.toml` under `config_dir`.
    ///
    /// An explicit path is returned even when it does not exist, so that
    /// loading it reports [`SettingsError::FileNotFound`].
    pub fn locate(explicit: Option<PathBuf>, local: &Path, config_dir: Option<PathBuf>) -> Option<PathBuf> {
        if explicit.is_some() {
            return explicit;
        }
        if local.exists() {
            return Some(local.to_path_buf());
        }
        config_dir
            .map(|dir| dir.join("inflections").join("config.toml"))
            .filter(|path| path.exists())
    }

    /// Register every configured locale on `inflector`, then switch its
    /// default locale if one is set.
    ///
    /// Every locale is compiled before any is registered, so an invalid
    /// pattern anywhere leaves `inflector` unchanged.
    pub fn apply(&self, inflector: &mut Inflector) -> Result<(), SettingsError> {
        let compiled = self
            .locales
            .iter()
            .map(|(locale, settings)| settings.compile(locale))
            .collect::<Result<Vec<_>, _>>()?;

        for locale in compiled {
            locale.register(inflector);
        }
        if let Some(locale) = &self.default_locale {
            inflector.set_default_locale(locale.as_str());
        }
        Ok(())
    }
}

impl Inflector {
    /// A registry with the built-in rules plus everything in `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, SettingsError> {
        let mut inflector = Self::new();
        settings.apply(&mut inflector)?;
        Ok(inflector)
    }

    /// A registry with the built-in rules plus the settings found by
    /// [`Settings::load`].
    pub fn from_config() -> Result<Self, SettingsError> {
        Self::from_settings(&Settings::load()?)
    }
}
