//! `--field value` pairs, as typed on a command line.
//!
//! Values are parsed according to the field kind, then the resulting object goes
//! through the same pipeline as any other untrusted input.

use crate::error::{ImportError, ImportErrorExt};
use crate::loader::reconstruct_from_value;
use crafter_domain::Options;
use crafter_domain::options::{FieldKind, FieldSpec, field};
use serde_json::{Map, Value, json};

/// Builds options from `(field, raw value)` pairs.
///
/// * numbers are parsed strictly (`--steps 10`);
/// * booleans accept `true` / `false`;
/// * lists are comma separated (`--special_effects glow,haze`);
/// * `style_preset` is `category/style`;
/// * `seed` accepts `null` and negative values.
///
/// # Errors
/// [`ImportError::UnknownArgument`] for names outside the schema,
/// [`ImportError::InvalidArgument`] for values that do not parse.
pub fn options_from_args<I, K, V>(pairs: I) -> Result<Options, ImportError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut object = Map::new();
    for (name, raw) in pairs {
        let name = name.as_ref();
        let spec = field(name)
            .ok_or_else(|| ImportError::UnknownArgument { field: name.to_owned(), context: None })?;
        object.insert(spec.name.to_owned(), parse_argument(spec, raw.as_ref())?);
    }

    reconstruct_from_value(Value::Object(object)).context("Building options from arguments")
}

/// Parses a single raw value for `spec`.
///
/// # Errors
/// [`ImportError::InvalidArgument`] when `raw` does not fit the field kind.
pub fn parse_argument(spec: &FieldSpec, raw: &str) -> Result<Value, ImportError> {
    let invalid = || ImportError::InvalidArgument {
        field: spec.name.to_owned(),
        value: raw.to_owned(),
        expected: spec.kind.as_str(),
        context: None,
    };
    let trimmed = raw.trim();

    let value = match spec.kind {
        FieldKind::Text => Value::String(raw.to_owned()),
        FieldKind::Integer => trimmed.parse::<u32>().map_err(|_| invalid())?.into(),
        FieldKind::SignedInteger => trimmed.parse::<i32>().map_err(|_| invalid())?.into(),
        FieldKind::Number => {
            let number = trimmed.parse::<f64>().map_err(|_| invalid())?;
            if !number.is_finite() {
                return Err(invalid());
            }
            number.into()
        },
        FieldKind::Boolean => match trimmed {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => return Err(invalid()),
        },
        FieldKind::NullableInteger if trimmed == "null" => Value::Null,
        FieldKind::NullableInteger => trimmed.parse::<i64>().map_err(|_| invalid())?.into(),
        FieldKind::TextList => Value::Array(
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| Value::String(item.to_owned()))
                .collect(),
        ),
        FieldKind::StylePreset => {
            let (category, style) = raw.split_once('/').ok_or_else(invalid)?;
            json!({ "category": category.trim(), "style": style.trim() })
        },
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_kind() {
        let options = options_from_args([
            ("prompt", "hello"),
            ("width", "123"),
            ("year", "-300"),
            ("guidance_scale", "6.5"),
            ("seed", "null"),
            ("special_effects", "glow, haze"),
            ("style_preset", "Photography/portrait"),
            ("prevent_deformities", "true"),
        ])
        .unwrap();

        assert_eq!(options.prompt, "hello");
        assert_eq!(options.width, 123);
        assert!(options.use_dimensions);
        assert_eq!(options.year, -300);
        assert!((options.guidance_scale - 6.5).abs() < f64::EPSILON);
        assert_eq!(options.seed, None);
        assert_eq!(options.special_effects, ["glow", "haze"]);
        assert!(options.use_special_effects);
        assert_eq!(options.style_preset.style, "portrait");
        assert!(options.prevent_deformities);
        assert!(options.use_enhancement_safety);
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = options_from_args([("bogus", "1")]).unwrap_err();
        assert!(matches!(err, ImportError::UnknownArgument { ref field, .. } if field == "bogus"));
    }

    #[test]
    fn unparsable_values_are_rejected() {
        for (name, raw) in [
            ("steps", "ten"),
            ("width", "-5"),
            ("temperature", "NaN"),
            ("use_dof", "yes"),
            ("style_preset", "no-separator"),
        ] {
            let err = options_from_args([(name, raw)]).unwrap_err();
            assert_eq!(err.kind(), "InvalidArgument", "{name}={raw}");
        }
    }
}
