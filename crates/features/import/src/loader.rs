use crate::error::ImportError;
use crafter_domain::flags::forced_flags;
use crafter_domain::{Options, PartialOptions};
use crafter_kernel::validation::parse_untrusted;
use serde_json::Value;
use tracing::{debug, error};

/// Rebuilds full options from JSON text.
///
/// # Errors
/// [`ImportError::Parse`] for malformed JSON, [`ImportError::Validation`] for anything
/// the strict schema rejects.
pub fn reconstruct_options(text: &str) -> Result<Options, ImportError> {
    let value: Value = serde_json::from_str(text)?;
    reconstruct_from_value(value)
}

/// Rebuilds full options from an already parsed JSON value.
///
/// The result is `defaults ⊕ input ⊕ forced flags`: every field present in the input
/// switches on the flags that gate it, even when the input sets that flag to `false`.
///
/// # Errors
/// [`ImportError::Validation`] when the value is not a schema-valid option object.
pub fn reconstruct_from_value(value: Value) -> Result<Options, ImportError> {
    let mut partial = parse_untrusted(value)?;
    normalize(&mut partial);

    let forced: Vec<&'static str> =
        partial.present_fields().into_iter().flat_map(forced_flags).collect();

    let mut options = Options::default();
    options.apply(partial);
    for flag in &forced {
        options.set_flag(flag, true);
    }

    debug!(forced = ?forced, "Options reconstructed");
    Ok(options)
}

/// [`reconstruct_options`] for callers that only need the outcome; the cause is logged.
#[must_use]
pub fn load_options_from_json(text: &str) -> Option<Options> {
    match reconstruct_options(text) {
        Ok(options) => Some(options),
        Err(err) => {
            error!(kind = err.kind(), error = %err, "Could not load options");
            None
        },
    }
}

/// Rule names may arrive in their machine form (`rule_of_thirds`).
fn normalize(partial: &mut PartialOptions) {
    if let Some(rules) = partial.composition_rules.as_mut() {
        for rule in rules.iter_mut().filter(|rule| rule.contains('_')) {
            *rule = rule.replace('_', " ");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_and_width_force_dimension_flags() {
        let options = reconstruct_options(r#"{"prompt":"test","width":512}"#).unwrap();
        assert_eq!(options.prompt, "test");
        assert_eq!(options.width, 512);
        assert!(options.use_dimensions_format);
        assert!(options.use_dimensions);
    }

    #[test]
    fn value_presence_beats_an_explicit_false_flag() {
        let options =
            reconstruct_options(r#"{"use_negative_prompt":false,"negative_prompt":"fog"}"#).unwrap();
        assert!(options.use_negative_prompt);
        assert_eq!(options.negative_prompt, "fog");
    }

    #[test]
    fn explicit_flags_without_values_are_kept() {
        let options = reconstruct_options(r#"{"use_core_settings":false}"#).unwrap();
        assert!(!options.use_core_settings);
    }

    #[test]
    fn composition_rules_are_normalized() {
        let options =
            reconstruct_options(r#"{"composition_rules":["rule_of_thirds","leading lines"]}"#)
                .unwrap();
        assert_eq!(options.composition_rules, ["rule of thirds", "leading lines"]);
        assert!(options.use_camera_composition);
    }

    #[test]
    fn dnd_fields_open_the_section() {
        let options = reconstruct_options(r#"{"dnd_monster_type":"lich"}"#).unwrap();
        assert!(options.use_dnd_section);
        assert!(options.use_dnd_monster_type);
        assert!(!options.use_dnd_item_type);
    }

    #[test]
    fn failures_are_typed() {
        assert_eq!(reconstruct_options("{ invalid json").unwrap_err().kind(), "Parse");
        assert_eq!(reconstruct_options(r#"{"steps":"ten"}"#).unwrap_err().kind(), "Validation");
        assert_eq!(reconstruct_options(r#"{"unknown_key":"x"}"#).unwrap_err().kind(), "Validation");
        assert_eq!(
            reconstruct_options(r#"{"style_preset":{"category":"a"}}"#).unwrap_err().kind(),
            "Validation"
        );
        assert_eq!(reconstruct_options("[1,2]").unwrap_err().kind(), "Validation");
    }
}
