use crafter_domain::config::{CrafterConfig, LoggingConfig, ShareConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(!logging.json);
    assert!(logging.directory.is_none());

    let share = ShareConfig::default();
    assert_eq!(share.base_url, "https://crafter.invalid/");

    let cfg = CrafterConfig::default();
    assert!(cfg.presets.urls.is_empty());
    assert!(cfg.presets.files.is_empty());
}

#[test]
fn crafter_config_deserializes_partially() {
    let raw = json!({
        "logging": { "level": "debug", "directory": "/tmp/crafter-logs" },
        "presets": { "urls": ["https://presets.example/extra.json"] }
    });

    let cfg: CrafterConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.directory, Some(std::path::PathBuf::from("/tmp/crafter-logs")));
    assert_eq!(cfg.share.base_url, "https://crafter.invalid/");
    assert_eq!(cfg.presets.urls.len(), 1);
}
