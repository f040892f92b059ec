//! Strict structural validation of option objects.
//!
//! Every key must be a schema field and every value must have exactly the field's
//! JSON shape. Validation is fail-closed: one bad key rejects the whole object, and
//! nothing is coerced.

use crate::security::strip_reserved_keys;
use crafter_domain::options::{FieldKind, PartialOptions, field};
use serde_json::{Map, Value};
use std::borrow::Cow;
use tracing::debug;

#[crafter_derive::crafter_error]
pub enum ValidationError {
    #[error("Options must be a JSON object, got {found}{}", format_context(.context))]
    NotAnObject { found: &'static str, context: Option<Cow<'static, str>> },

    #[error("Unknown option `{field}`{}", format_context(.context))]
    UnknownField { field: String, context: Option<Cow<'static, str>> },

    #[error("Option `{field}` must be {expected}, got {found}{}", format_context(.context))]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
        context: Option<Cow<'static, str>>,
    },

    #[error("Options do not match the schema{}: {source}", format_context(.context))]
    Schema { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal validation error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Validates `candidate` as a partial option object.
///
/// # Errors
/// The first offending key, as [`ValidationError::UnknownField`] or
/// [`ValidationError::TypeMismatch`]; [`ValidationError::NotAnObject`] for non-objects.
pub fn validate_options(candidate: &Value) -> Result<(), ValidationError> {
    let Value::Object(map) = candidate else {
        return Err(ValidationError::NotAnObject { found: describe(candidate), context: None });
    };
    validate_map(map)
}

/// Boolean form of [`validate_options`].
#[must_use]
pub fn is_valid_options(candidate: &Value) -> bool {
    validate_options(candidate).is_ok()
}

/// Validates the entries of an option object.
///
/// # Errors
/// See [`validate_options`].
pub fn validate_map(map: &Map<String, Value>) -> Result<(), ValidationError> {
    for (key, value) in map {
        let spec = field(key)
            .ok_or_else(|| ValidationError::UnknownField { field: key.clone(), context: None })?;

        if !matches_kind(spec.kind, value) {
            return Err(ValidationError::TypeMismatch {
                field: key.clone(),
                expected: spec.kind.as_str(),
                found: describe(value),
                context: None,
            });
        }
    }
    Ok(())
}

/// Turns untrusted JSON into typed partial options: object check, reserved-key
/// stripping, strict validation, then deserialization.
///
/// # Errors
/// Any [`ValidationError`]; no partial result is produced.
pub fn parse_untrusted(value: Value) -> Result<PartialOptions, ValidationError> {
    let Value::Object(mut map) = value else {
        return Err(ValidationError::NotAnObject { found: describe(&value), context: None });
    };

    strip_reserved_keys(&mut map);
    validate_map(&map)?;
    normalize_integers(&mut map);
    debug!(fields = map.len(), "Untrusted options passed validation");

    Ok(serde_json::from_value(Value::Object(map))?)
}

fn matches_kind(kind: FieldKind, value: &Value) -> bool {
    match kind {
        FieldKind::Text => value.is_string(),
        FieldKind::Integer => integral(value).is_some_and(|n| u32::try_from(n).is_ok()),
        FieldKind::SignedInteger => integral(value).is_some_and(|n| i32::try_from(n).is_ok()),
        FieldKind::Number => value.is_number(),
        FieldKind::Boolean => value.is_boolean(),
        FieldKind::NullableInteger => value.is_null() || integral(value).is_some(),
        FieldKind::TextList => value.as_array().is_some_and(|items| items.iter().all(Value::is_string)),
        FieldKind::StylePreset => value.as_object().is_some_and(|preset| {
            preset.len() == 2
                && preset.get("category").is_some_and(Value::is_string)
                && preset.get("style").is_some_and(Value::is_string)
        }),
    }
}

/// Integer value of a JSON number, accepting whole floats (`2024.0`) that fit in `i64`.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn integral(value: &Value) -> Option<i64> {
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(f))
        .map(|f| f as i64)
}

/// Rewrites whole floats of integer fields as JSON integers so they deserialize.
fn normalize_integers(map: &mut Map<String, Value>) {
    for (key, value) in map.iter_mut() {
        let integer_field = field(key).is_some_and(|spec| {
            matches!(
                spec.kind,
                FieldKind::Integer | FieldKind::SignedInteger | FieldKind::NullableInteger
            )
        });
        if integer_field
            && value.is_f64()
            && let Some(n) = integral(value)
        {
            *value = Value::from(n);
        }
    }
}

/// Short article-prefixed name of a JSON value's type, for error messages.
#[must_use]
pub const fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_is_valid() {
        assert!(is_valid_options(&json!({})));
    }

    #[test]
    fn accepts_every_kind() {
        assert!(is_valid_options(&json!({
            "special_effects": ["glow"],
            "seed": null,
            "style_preset": { "category": "a", "style": "b" },
            "year": -500,
            "guidance_scale": 7,
            "temperature": 0.8,
            "use_dnd_section": true
        })));
        assert!(is_valid_options(&json!({ "seed": -1 })));
        assert!(is_valid_options(&json!({ "seed": 9_223_372_036_854_775_807_i64 })));
        assert!(is_valid_options(&json!({ "year": 2024.0, "steps": 30.0 })));
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert!(!is_valid_options(&json!({ "special_effects": "glow" })));
        assert!(!is_valid_options(&json!({ "special_effects": ["glow", 1] })));
        assert!(!is_valid_options(&json!({ "style_preset": { "category": 1, "style": "b" } })));
        assert!(!is_valid_options(&json!({ "style_preset": { "category": "a" } })));
        assert!(!is_valid_options(
            &json!({ "style_preset": { "category": "a", "style": "b", "extra": "c" } })
        ));
        assert!(!is_valid_options(&json!({ "steps": "ten" })));
        assert!(!is_valid_options(&json!({ "steps": -1 })));
        assert!(!is_valid_options(&json!({ "steps": 10.5 })));
        assert!(!is_valid_options(&json!({ "width": 4_294_967_296_u64 })));
        assert!(!is_valid_options(&json!({ "seed": 18_446_744_073_709_551_615_u64 })));
        assert!(!is_valid_options(&json!({ "seed": 1.5 })));
        assert!(!is_valid_options(&json!({ "steps": -30.0 })));
        assert!(!is_valid_options(&json!({ "prompt": null })));
    }

    #[test]
    fn one_bad_key_rejects_the_whole_object() {
        let err = validate_options(&json!({ "prompt": "ok", "unknown_key": "x" })).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownField { ref field, .. } if field == "unknown_key"));
    }

    #[test]
    fn type_mismatch_names_the_field() {
        let err = validate_options(&json!({ "steps": "ten" })).unwrap_err();
        assert_eq!(err.to_string(), "Option `steps` must be integer, got a string");
        assert_eq!(err.kind(), "TypeMismatch");
    }

    #[test]
    fn non_objects_are_rejected() {
        let err = validate_options(&json!(["prompt"])).unwrap_err();
        assert!(matches!(err, ValidationError::NotAnObject { found: "an array", .. }));
    }

    #[test]
    fn parse_untrusted_strips_then_validates() {
        let partial = parse_untrusted(json!({
            "constructor": { "prototype": { "polluted": "yes" } },
            "prompt": "test"
        }))
        .unwrap();
        assert_eq!(partial.present_fields(), ["prompt"]);

        assert!(parse_untrusted(json!({ "__proto__": {}, "bogus": 1 })).is_err());
    }
}
