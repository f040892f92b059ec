use crafter_domain::flags::{OPTION_FLAG_MAP, PRESENCE_RULES};
use crafter_domain::gating::GATING_RULES;
use crafter_domain::options::field;
use crafter_domain::{FIELDS, FieldKind, Options};

#[test]
fn every_mapped_flag_is_a_boolean_of_the_defaults() {
    let defaults = Options::default();
    for (value_field, flag) in OPTION_FLAG_MAP {
        assert!(defaults.flag(flag).is_some(), "{flag} (for {value_field}) is not a boolean field");
    }
    for rule in PRESENCE_RULES {
        assert!(defaults.flag(rule.flag).is_some(), "{} is not a boolean field", rule.flag);
    }
}

#[test]
fn every_mapped_value_field_is_a_schema_field() {
    for (value_field, _) in OPTION_FLAG_MAP {
        assert!(field(value_field).is_some(), "{value_field} is not in the schema");
    }
}

#[test]
fn gating_rules_reference_schema_fields_and_flags() {
    let defaults = Options::default();
    for rule in GATING_RULES {
        for name in rule.fields {
            assert!(field(name).is_some(), "rule {}: unknown field {name}", rule.name);
        }
        for flag in rule.requires {
            assert!(defaults.flag(flag).is_some(), "rule {}: {flag} is not a flag", rule.name);
        }
    }
}

#[test]
fn field_table_matches_serialized_key_order() {
    let serialized = serde_json::to_value(Options::default()).unwrap();
    let keys: Vec<&str> = serialized.as_object().unwrap().keys().map(String::as_str).collect();
    let table: Vec<&str> = FIELDS.iter().map(|spec| spec.name).collect();
    assert_eq!(keys, table);
}

#[test]
fn non_flag_booleans_exist() {
    // Booleans that do not carry an internal prefix survive the marker strip and are
    // only removed by the false-value pass.
    let plain: Vec<_> = FIELDS
        .iter()
        .filter(|spec| spec.kind == FieldKind::Boolean)
        .filter(|spec| !spec.name.starts_with("use_") && !spec.name.starts_with("extended_"))
        .map(|spec| spec.name)
        .collect();
    assert!(plain.contains(&"prevent_deformities"));
    assert!(plain.contains(&"keep_key_details"));
}
