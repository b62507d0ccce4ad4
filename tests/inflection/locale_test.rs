//! Integration tests for locale isolation.

use inflections::{Inflector, Pattern};

fn rx(source: &str) -> Pattern {
    Pattern::regex(source).unwrap()
}

fn with_spanish() -> Inflector {
    let mut inflector = Inflector::new();
    inflector.configure("es", |inflect| {
        inflect
            .plural(rx("$"), "s")
            .plural(rx("(?i)z$"), "ces")
            .singular(rx("s$"), "")
            .singular(rx("es$"), "")
            .irregular("el", "los");
    });
    inflector
}

#[test]
fn test_respects_locale() {
    let inflector = with_spanish();

    assert_eq!(inflector.pluralize_in("hijo", "es"), "hijos");
    assert_eq!(inflector.pluralize_in("luz", "es"), "luces");
    assert_eq!(inflector.pluralize("luz"), "luzs");

    assert_eq!(inflector.singularize_in("sociedades", "es"), "sociedad");
    assert_eq!(inflector.singularize("sociedades"), "sociedade");

    assert_eq!(inflector.pluralize_in("el", "es"), "los");
    assert_eq!(inflector.pluralize("el"), "els");
}

#[test]
fn test_clearing_one_locale_leaves_others() {
    let mut inflector = with_spanish();
    inflector.configure("es", |inflect| {
        inflect.clear_all();
    });

    assert!(inflector.inflections("es").plurals().is_empty());
    assert!(inflector.inflections("es").singulars().is_empty());
    assert!(!inflector.inflections("en").plurals().is_empty());
    assert!(!inflector.inflections("en").singulars().is_empty());
}

#[test]
fn test_unknown_locale_is_identity() {
    let inflector = Inflector::new();
    assert_eq!(inflector.pluralize_in("gato", "pt"), "gato");
    assert_eq!(inflector.singularize_in("gatos", "pt"), "gatos");
    assert_eq!(inflector.locales(), vec!["en"]);
}

#[test]
fn test_uncountables_are_per_locale() {
    let mut inflector = with_spanish();
    inflector.configure("es", |inflect| {
        inflect.uncountable(["crisis"]);
    });

    assert_eq!(inflector.pluralize_in("crisis", "es"), "crisis");
    assert_eq!(inflector.pluralize("crisis"), "crises");
    assert_eq!(inflector.pluralize_in("fish", "es"), "fishs");
}

#[test]
fn test_default_locale_switch() {
    let mut inflector = with_spanish();
    inflector.set_default_locale("es");

    assert_eq!(inflector.pluralize("luz"), "luces");
    assert_eq!(inflector.pluralize_in("luz", "en"), "luzs");
}
