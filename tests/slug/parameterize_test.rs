//! Integration tests for transliterate and parameterize.

use inflections::{Inflector, ParameterizeOptions, TransliterateOptions};

const STRING_TO_PARAMETERIZED: &[(&str, &str)] = &[
    ("Donald E. Knuth", "donald-e-knuth"),
    ("Random text with *(bad)* characters", "random-text-with-bad-characters"),
    ("Allow_Under_Scores", "allow_under_scores"),
    ("Trailing bad characters!@#", "trailing-bad-characters"),
    ("!@#Leading bad characters", "leading-bad-characters"),
    ("Squeeze   separators", "squeeze-separators"),
    ("Test with + sign", "test-with-sign"),
    ("Test with malformed utf8 \u{a9}", "test-with-malformed-utf8"),
];

const STRING_TO_PARAMETERIZE_WITH_NO_SEPARATOR: &[(&str, &str)] = &[
    ("Donald E. Knuth", "donaldeknuth"),
    ("With-some-dashes", "with-some-dashes"),
    ("Random text with *(bad)* characters", "randomtextwithbadcharacters"),
    ("Trailing bad characters!@#", "trailingbadcharacters"),
    ("!@#Leading bad characters", "leadingbadcharacters"),
    ("Squeeze   separators", "squeezeseparators"),
    ("Test with + sign", "testwithsign"),
    ("Test with malformed utf8 \u{a9}", "testwithmalformedutf8"),
];

const STRING_TO_PARAMETERIZE_WITH_PRESERVE_CASE: &[(&str, &str)] = &[
    ("Donald E. Knuth", "Donald-E-Knuth"),
    ("Random text with *(bad)* Characters", "Random-text-with-bad-Characters"),
    ("Allow_Under_Scores", "Allow_Under_Scores"),
    ("Trailing BAD characters!@#", "Trailing-BAD-characters"),
    ("!@#leading bad Characters", "leading-bad-Characters"),
    ("squeeze   Separators", "squeeze-Separators"),
    ("Test with + Sign", "Test-with-Sign"),
    ("Test with malformed UTF8 \u{a9}", "Test-with-malformed-UTF8"),
];

const STRING_TO_PARAMETERIZE_WITH_UNDERSCORE: &[(&str, &str)] = &[
    ("Donald E. Knuth", "donald_e_knuth"),
    ("Random text with *(bad)* characters", "random_text_with_bad_characters"),
    ("With-some-dashes", "with-some-dashes"),
    ("Retain_underscore", "retain_underscore"),
    ("Trailing bad characters!@#", "trailing_bad_characters"),
    ("!@#Leading bad characters", "leading_bad_characters"),
    ("Squeeze   separators", "squeeze_separators"),
    ("Test with + sign", "test_with_sign"),
    ("Test with malformed utf8 \u{a9}", "test_with_malformed_utf8"),
];

const STRING_TO_PARAMETERIZED_AND_NORMALIZED: &[(&str, &str)] = &[
    ("Malmö", "malmo"),
    ("Garçons", "garcons"),
    ("Ops\u{d9}", "opsu"),
    ("Ærøskøbing", "aeroskobing"),
    ("Aßlar", "asslar"),
    ("Japanese: 日本語", "japanese"),
];

#[test]
fn test_parameterize() {
    let inflector = Inflector::new();
    for (text, slug) in STRING_TO_PARAMETERIZED {
        assert_eq!(inflector.parameterize(text), *slug, "parameterize({text:?})");
    }
}

#[test]
fn test_parameterize_and_normalize() {
    let inflector = Inflector::new();
    for (text, slug) in STRING_TO_PARAMETERIZED_AND_NORMALIZED {
        assert_eq!(inflector.parameterize(text), *slug, "parameterize({text:?})");
    }
}

#[test]
fn test_parameterize_with_custom_separator() {
    let inflector = Inflector::new();
    let options = ParameterizeOptions {
        separator: Some("_"),
        ..Default::default()
    };
    for (text, slug) in STRING_TO_PARAMETERIZE_WITH_UNDERSCORE {
        assert_eq!(inflector.parameterize_with(text, options), *slug, "parameterize({text:?})");
    }
}

#[test]
fn test_parameterize_with_no_separator() {
    let inflector = Inflector::new();
    for separator in [None, Some("")] {
        let options = ParameterizeOptions {
            separator,
            ..Default::default()
        };
        for (text, slug) in STRING_TO_PARAMETERIZE_WITH_NO_SEPARATOR {
            assert_eq!(inflector.parameterize_with(text, options), *slug, "parameterize({text:?})");
        }
    }
}

#[test]
fn test_parameterize_with_preserve_case() {
    let inflector = Inflector::new();
    let options = ParameterizeOptions {
        preserve_case: true,
        ..Default::default()
    };
    for (text, slug) in STRING_TO_PARAMETERIZE_WITH_PRESERVE_CASE {
        assert_eq!(inflector.parameterize_with(text, options), *slug, "parameterize({text:?})");
    }
}

#[test]
fn test_parameterize_with_multi_character_separator() {
    let inflector = Inflector::new();
    let options = ParameterizeOptions {
        separator: Some("__sep__"),
        ..Default::default()
    };
    assert_eq!(
        inflector.parameterize_with("Donald E. Knuth", options),
        "donald__sep__e__sep__knuth"
    );
    assert_eq!(inflector.parameterize_with("!@#Leading", options), "leading");
}

#[test]
fn test_transliterate_with_custom_approximations() {
    let mut inflector = Inflector::new();
    assert_eq!(inflector.transliterate("Jürgen"), "Jurgen");

    inflector.configure_transliterations("en", |t| {
        t.approximate("ü", "ue");
    });
    assert_eq!(inflector.transliterate("Jürgen"), "Juergen");
}

#[test]
fn test_transliterate_per_locale() {
    let mut inflector = Inflector::new();
    inflector.configure_transliterations("de", |t| {
        t.approximate("ü", "ue");
    });

    let de = TransliterateOptions {
        locale: Some("de"),
        ..Default::default()
    };
    assert_eq!(inflector.transliterate_with("Jürgen", de), "Juergen");
    assert_eq!(inflector.transliterate("Jürgen"), "Jurgen");

    let slug = ParameterizeOptions {
        locale: Some("de"),
        ..Default::default()
    };
    assert_eq!(inflector.parameterize_with("Jürgen Müller", slug), "juergen-mueller");
}

#[test]
fn test_transliterate_added_letters() {
    let mut inflector = Inflector::new();
    inflector.configure_transliterations("en", |t| {
        t.approximate("ﬀ", "ff").approximate("Ǆ", "DZ").approximate("ǅ", "Dz");
    });
    assert_eq!(inflector.transliterate("ǅemal ﬀ"), "Dzemal ff");
}

#[test]
fn test_transliterate_replacement() {
    let inflector = Inflector::new();
    assert_eq!(inflector.transliterate("日本語"), "???");

    let options = TransliterateOptions {
        replacement: "",
        ..Default::default()
    };
    assert_eq!(inflector.transliterate_with("a日b", options), "ab");
}
