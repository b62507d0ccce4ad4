//! Built-in rule sets.
//!
//! Rules are registered in the classic order: every registration is tried
//! before the ones above it, so the generic `$ → s` rule comes first and the
//! irregulars last.

use tracing::debug;

use crate::registry::{Inflector, DEFAULT_LOCALE};
use crate::rules::{Inflections, Pattern};

/// Populate the built-in locales of `inflector`.
pub fn seed_defaults(inflector: &mut Inflector) {
    let inflect = inflector.inflections_mut(DEFAULT_LOCALE);
    english(inflect);
    debug!(
        locale = DEFAULT_LOCALE,
        plurals = inflect.plurals().len(),
        singulars = inflect.singulars().len(),
        uncountables = inflect.uncountables().len(),
        "seeded default inflections"
    );
}

/// The standard English rule table.
pub fn english(inflect: &mut Inflections) {
    inflect
        .plural(rx("$"), "s")
        .plural(rx("(?i)s$"), "s")
        .plural(rx("(?i)^(ax|test)is$"), "$1es")
        .plural(rx("(?i)(octop|vir)us$"), "$1i")
        .plural(rx("(?i)(octop|vir)i$"), "$1i")
        .plural(rx("(?i)(alias|status)$"), "$1es")
        .plural(rx("(?i)(bu)s$"), "$1ses")
        .plural(rx("(?i)(buffal|tomat)o$"), "$1oes")
        .plural(rx("(?i)([ti])um$"), "$1a")
        .plural(rx("(?i)([ti])a$"), "$1a")
        .plural(rx("(?i)sis$"), "ses")
        .plural(rx("(?i)(?:([^f])fe|([lr])f)$"), "$1$2ves")
        .plural(rx("(?i)(hive)$"), "$1s")
        .plural(rx("(?i)([^aeiouy]|qu)y$"), "$1ies")
        .plural(rx("(?i)(x|ch|ss|sh)$"), "$1es")
        .plural(rx("(?i)(matr|vert|ind)(?:ix|ex)$"), "$1ices")
        .plural(rx("(?i)^(m|l)ouse$"), "$1ice")
        .plural(rx("(?i)^(m|l)ice$"), "$1ice")
        .plural(rx("(?i)^(ox)$"), "$1en")
        .plural(rx("(?i)^(oxen)$"), "$1")
        .plural(rx("(?i)(quiz)$"), "$1zes");

    inflect
        .singular(rx("(?i)s$"), "")
        .singular(rx("(?i)(ss)$"), "$1")
        .singular(rx("(?i)(n)ews$"), "$1ews")
        .singular(rx("(?i)([ti])a$"), "$1um")
        .singular(
            rx("(?i)((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)(sis|ses)$"),
            "$1sis",
        )
        .singular(rx("(?i)(^analy)(sis|ses)$"), "$1sis")
        .singular(rx("(?i)([^f])ves$"), "$1fe")
        .singular(rx("(?i)(hive)s$"), "$1")
        .singular(rx("(?i)(tive)s$"), "$1")
        .singular(rx("(?i)([lr])ves$"), "$1f")
        .singular(rx("(?i)([^aeiouy]|qu)ies$"), "$1y")
        .singular(rx("(?i)(s)eries$"), "$1eries")
        .singular(rx("(?i)(m)ovies$"), "$1ovie")
        .singular(rx("(?i)(x|ch|ss|sh)es$"), "$1")
        .singular(rx("(?i)^(m|l)ice$"), "$1ouse")
        .singular(rx("(?i)(bus)(es)?$"), "$1")
        .singular(rx("(?i)(o)es$"), "$1")
        .singular(rx("(?i)(shoe)s$"), "$1")
        .singular(rx("(?i)(cris|test)(is|es)$"), "$1is")
        .singular(rx("(?i)^(a)x[ie]s$"), "$1xis")
        .singular(rx("(?i)(octop|vir)(us|i)$"), "$1us")
        .singular(rx("(?i)(alias|status)(es)?$"), "$1")
        .singular(rx("(?i)^(ox)en"), "$1")
        .singular(rx("(?i)(vert|ind)ices$"), "$1ex")
        .singular(rx("(?i)(matr)ices$"), "$1ix")
        .singular(rx("(?i)(quiz)zes$"), "$1")
        .singular(rx("(?i)(database)s$"), "$1");

    inflect
        .irregular("person", "people")
        .irregular("man", "men")
        .irregular("child", "children")
        .irregular("sex", "sexes")
        .irregular("move", "moves")
        .irregular("zombie", "zombies");

    inflect.uncountable([
        "equipment",
        "information",
        "rice",
        "money",
        "species",
        "series",
        "fish",
        "sheep",
        "jeans",
        "police",
    ]);
}

/// Compile a built-in pattern.
fn rx(source: &str) -> Pattern {
    Pattern::regex(source).expect("built-in inflection pattern must compile")
}
