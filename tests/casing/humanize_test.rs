//! Integration tests for humanize and titleize.

use inflections::{HumanizeOptions, Inflector, Pattern};

const UNDERSCORE_TO_HUMAN: &[(&str, &str)] = &[
    ("employee_salary", "Employee salary"),
    ("employee_id", "Employee"),
    ("underground", "Underground"),
];

const UNDERSCORE_TO_HUMAN_WITHOUT_CAPITALIZE: &[(&str, &str)] = &[
    ("employee_salary", "employee salary"),
    ("employee_id", "employee"),
    ("underground", "underground"),
];

const MIXTURE_TO_TITLE_CASE: &[(&str, &str)] = &[
    ("active_record", "Active Record"),
    ("ActiveRecord", "Active Record"),
    ("action web service", "Action Web Service"),
    ("Action Web Service", "Action Web Service"),
    ("Action web service", "Action Web Service"),
    ("actionwebservice", "Actionwebservice"),
    ("Actionwebservice", "Actionwebservice"),
    ("david's code", "David's Code"),
    ("David's code", "David's Code"),
    ("david's Code", "David's Code"),
    ("sgt. pepper's", "Sgt. Pepper's"),
    ("i've just seen a face", "I've Just Seen A Face"),
    ("maybe you'll be there", "Maybe You'll Be There"),
    ("¿por qué?", "¿Por Qué?"),
    ("Fred’s", "Fred’s"),
    ("Fred`s", "Fred`s"),
];

#[test]
fn test_humanize() {
    let inflector = Inflector::new();
    for (underscore, human) in UNDERSCORE_TO_HUMAN {
        assert_eq!(inflector.humanize(underscore), *human);
    }
}

#[test]
fn test_humanize_without_capitalize() {
    let inflector = Inflector::new();
    let options = HumanizeOptions { capitalize: false };
    for (underscore, human) in UNDERSCORE_TO_HUMAN_WITHOUT_CAPITALIZE {
        assert_eq!(inflector.humanize_with(underscore, options), *human);
    }
}

#[test]
fn test_humanize_by_rule() {
    let mut inflector = Inflector::new();
    inflector.configure("en", |inflect| {
        inflect
            .human(Pattern::regex("(?i)_cnt$").unwrap(), "_count")
            .human(Pattern::regex("(?i)^prefx_").unwrap(), "");
    });

    assert_eq!(inflector.humanize("jargon_cnt"), "Jargon count");
    assert_eq!(inflector.humanize("prefx_request"), "Request");
}

#[test]
fn test_humanize_by_string() {
    let mut inflector = Inflector::new();
    inflector.configure("en", |inflect| {
        inflect.human("col_rpted_bugs", "Reported bugs");
    });

    assert_eq!(inflector.humanize("col_rpted_bugs"), "Reported bugs");
    assert_eq!(inflector.humanize("COL_rpted_bugs"), "Col rpted bugs");
}

#[test]
fn test_humanize_rule_from_notation() {
    let mut inflector = Inflector::new();
    inflector.configure("en", |inflect| {
        inflect.human(Pattern::parse("/_qty$/i").unwrap(), "_quantity");
    });

    assert_eq!(inflector.humanize("order_QTY"), "Order quantity");
}

#[test]
fn test_titleize() {
    let inflector = Inflector::new();
    for (mixture, titleized) in MIXTURE_TO_TITLE_CASE {
        assert_eq!(inflector.titleize(mixture), *titleized, "titleize({mixture:?})");
    }
}

#[test]
fn test_human_rules_snapshot() {
    let mut inflector = Inflector::new();
    inflector.configure("en", |inflect| {
        inflect
            .human(Pattern::regex("(?i)_cnt$").unwrap(), "_count")
            .human("col_rpted_bugs", "Reported bugs");
    });

    insta::assert_snapshot!(inflector.inflections("en").humans().to_string(), @r#"
    "col_rpted_bugs" => "Reported bugs"
    /(?i)_cnt$/ => "_count"
    "#);
}
