use crate::error::ExportError;
use crafter_domain::Options;
use crafter_domain::flags::flag_for;
use crafter_domain::gating::{ALWAYS_OMITTED, GATING_RULES, is_internal};
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Why a key is left out of the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Omission {
    /// `use_*` / `extended_*` marker.
    InternalMarker,
    /// Never exported.
    AlwaysOmitted,
    /// The field's own enable flag is off.
    FlagDisabled(&'static str),
    /// A compound gating rule is closed.
    RuleClosed(&'static str),
    /// Boolean `false`.
    FalseValue,
}

/// Decides whether `key` (holding `value`) is left out of the export of `options`.
#[must_use]
pub fn omission(options: &Options, key: &str, value: &Value) -> Option<Omission> {
    if is_internal(key) {
        return Some(Omission::InternalMarker);
    }
    if ALWAYS_OMITTED.contains(&key) {
        return Some(Omission::AlwaysOmitted);
    }
    if let Some(flag) = flag_for(key).filter(|flag| !is_enabled(options, flag)) {
        return Some(Omission::FlagDisabled(flag));
    }
    if let Some(rule) = GATING_RULES.iter().find(|rule| {
        rule.fields.contains(&key) && !rule.requires.iter().all(|flag| is_enabled(options, flag))
    }) {
        return Some(Omission::RuleClosed(rule.name));
    }
    (value == &Value::Bool(false)).then_some(Omission::FalseValue)
}

/// Compiles `options` into the ordered map of exported fields.
///
/// # Errors
/// Returns [`ExportError::Serialize`] if the options cannot be turned into JSON.
pub fn compile(options: &Options) -> Result<Map<String, Value>, ExportError> {
    let Value::Object(mut map) = serde_json::to_value(options)? else {
        return Err("Options did not serialize to a JSON object".into());
    };

    map.retain(|key, value| match omission(options, key, value) {
        Some(reason) => {
            trace!(key = %key, ?reason, "Field omitted from export");
            false
        },
        None => true,
    });

    debug!(fields = map.len(), "Options compiled");
    Ok(map)
}

/// Compiles `options` into 2-space indented JSON text.
///
/// # Errors
/// See [`compile`].
pub fn generate_output(options: &Options) -> Result<String, ExportError> {
    let map = compile(options)?;
    Ok(serde_json::to_string_pretty(&Value::Object(map))?)
}

/// Compiles `options` into single-line JSON text.
///
/// # Errors
/// See [`compile`].
pub fn generate_output_compact(options: &Options) -> Result<String, ExportError> {
    let map = compile(options)?;
    Ok(serde_json::to_string(&Value::Object(map))?)
}

fn is_enabled(options: &Options, flag: &str) -> bool {
    options.flag(flag) == Some(true)
}
