//! Integration tests for camelize, underscore, dasherize, tableize, classify
//! and friends.

use inflections::Inflector;

const CAMEL_TO_UNDERSCORE: &[(&str, &str)] = &[
    ("Product", "product"),
    ("SpecialGuest", "special_guest"),
    ("ApplicationController", "application_controller"),
    ("Area51Controller", "area51_controller"),
];

const UNDERSCORE_TO_LOWER_CAMEL: &[(&str, &str)] = &[
    ("product", "product"),
    ("special_guest", "specialGuest"),
    ("application_controller", "applicationController"),
    ("area51_controller", "area51Controller"),
];

const CAMEL_TO_UNDERSCORE_WITHOUT_REVERSE: &[(&str, &str)] = &[
    ("HTMLTidy", "html_tidy"),
    ("HTMLTidyGenerator", "html_tidy_generator"),
    ("FreeBSD", "free_bsd"),
    ("HTML", "html"),
];

const CLASS_NAME_TO_TABLE_NAME: &[(&str, &str)] = &[
    ("PrimarySpokesman", "primary_spokesmen"),
    ("NodeChild", "node_children"),
];

const UNDERSCORES_TO_DASHES: &[(&str, &str)] = &[
    ("street", "street"),
    ("street_address", "street-address"),
    ("person_street_address", "person-street-address"),
];

const WORDS_TO_CONSTANT_CASE: &[(&str, &str)] = &[
    ("Conciliation", "CONCILIATION"),
    ("conciliation", "CONCILIATION"),
    ("bankAccount", "BANK_ACCOUNT"),
    ("BankAccount", "BANK_ACCOUNT"),
    ("bank-account", "BANK_ACCOUNT"),
    ("bank_account", "BANK_ACCOUNT"),
    ("Bank Account", "BANK_ACCOUNT"),
    ("Multiple   Bank Account", "MULTIPLE_BANK_ACCOUNT"),
];

#[test]
fn test_camelize() {
    let inflector = Inflector::new();
    for (camel, underscore) in CAMEL_TO_UNDERSCORE {
        assert_eq!(inflector.camelize(underscore), *camel);
    }
}

#[test]
fn test_camelize_with_underscores() {
    let inflector = Inflector::new();
    assert_eq!(inflector.camelize("Camel_Case"), "CamelCase");
}

#[test]
fn test_camelize_lower_downcases_first_letter() {
    let inflector = Inflector::new();
    assert_eq!(inflector.camelize_lower("Capital"), "capital");
    assert_eq!(inflector.camelize_with("Capital", false), "capital");
}

#[test]
fn test_camelize_lower() {
    let inflector = Inflector::new();
    for (underscored, lower_camel) in UNDERSCORE_TO_LOWER_CAMEL {
        assert_eq!(inflector.camelize_lower(underscored), *lower_camel);
    }
}

#[test]
fn test_camelize_path() {
    let inflector = Inflector::new();
    assert_eq!(inflector.camelize("active_model/errors"), "ActiveModel/Errors");
    assert_eq!(inflector.camelize_lower("active_model/errors"), "activeModel/Errors");
}

#[test]
fn test_underscore() {
    let inflector = Inflector::new();
    for (camel, underscore) in CAMEL_TO_UNDERSCORE {
        assert_eq!(inflector.underscore(camel), *underscore);
    }
    for (camel, underscore) in CAMEL_TO_UNDERSCORE_WITHOUT_REVERSE {
        assert_eq!(inflector.underscore(camel), *underscore);
    }
}

#[test]
fn test_foreign_key() {
    let inflector = Inflector::new();
    assert_eq!(inflector.foreign_key("Person"), "person_id");
    assert_eq!(inflector.foreign_key("BillingAccount"), "billing_account_id");
    assert_eq!(inflector.foreign_key_with("Person", false), "personid");
    assert_eq!(inflector.foreign_key_with("BillingAccount", false), "billing_accountid");
}

#[test]
fn test_tableize() {
    let inflector = Inflector::new();
    for (class_name, table_name) in CLASS_NAME_TO_TABLE_NAME {
        assert_eq!(inflector.tableize(class_name), *table_name);
    }
}

#[test]
fn test_classify() {
    let inflector = Inflector::new();
    for (class_name, table_name) in CLASS_NAME_TO_TABLE_NAME {
        assert_eq!(inflector.classify(table_name), *class_name);
        assert_eq!(inflector.classify(&format!("table_prefix.{table_name}")), *class_name);
    }
}

#[test]
fn test_classify_with_leading_schema_name() {
    let inflector = Inflector::new();
    assert_eq!(inflector.classify("schema.foo_bar"), "FooBar");
}

#[test]
fn test_dasherize() {
    let inflector = Inflector::new();
    for (underscored, dasherized) in UNDERSCORES_TO_DASHES {
        assert_eq!(inflector.dasherize(underscored), *dasherized);
    }
}

#[test]
fn test_underscore_reverses_dasherize() {
    let inflector = Inflector::new();
    for (underscored, _) in UNDERSCORES_TO_DASHES {
        assert_eq!(inflector.underscore(&inflector.dasherize(underscored)), *underscored);
    }
}

#[test]
fn test_constantify() {
    let inflector = Inflector::new();
    for (word, constant) in WORDS_TO_CONSTANT_CASE {
        assert_eq!(inflector.constantify(word), *constant, "constantify({word:?})");
    }
}

#[test]
fn test_capitalize() {
    let inflector = Inflector::new();
    assert_eq!(inflector.capitalize("foo"), "Foo");
    assert_eq!(inflector.capitalize("FOO"), "FOO");
    assert_eq!(inflector.capitalize("foo bar"), "Foo bar");
    assert_eq!(inflector.capitalize(123), "123");
    assert_eq!(inflector.capitalize(""), "");
    assert_eq!(inflector.capitalize(None::<&str>), "");
}
