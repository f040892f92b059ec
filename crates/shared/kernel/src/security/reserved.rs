use serde_json::{Map, Value};
use tracing::warn;

/// Keys that must never be interpreted when they arrive in untrusted input.
pub const RESERVED_KEYS: &[&str] = &["__proto__", "constructor", "prototype"];

/// Removes every top-level [`RESERVED_KEYS`] entry from `map`, keeping the order of the
/// remaining keys. Returns how many keys were removed.
///
/// Stripping is silent for callers: a reserved key is never an error, only a warning.
pub fn strip_reserved_keys(map: &mut Map<String, Value>) -> usize {
    let before = map.len();
    map.retain(|key, _| {
        let reserved = RESERVED_KEYS.contains(&key.as_str());
        if reserved {
            warn!(key = %key, "Stripped reserved key from untrusted options");
        }
        !reserved
    });
    before - map.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_only_reserved_keys() {
        let mut value = json!({
            "__proto__": { "polluted": "yes" },
            "prompt": "safe",
            "constructor": { "evil": true },
            "prototype": { "bad": 1 },
            "steps": 10
        });
        let map = value.as_object_mut().unwrap();

        assert_eq!(strip_reserved_keys(map), 3);
        assert_eq!(map.keys().collect::<Vec<_>>(), ["prompt", "steps"]);
    }

    #[test]
    fn nested_reserved_names_are_left_to_validation() {
        let mut value = json!({ "style_preset": { "__proto__": {} } });
        let map = value.as_object_mut().unwrap();

        assert_eq!(strip_reserved_keys(map), 0);
        assert!(map["style_preset"].get("__proto__").is_some());
    }
}
