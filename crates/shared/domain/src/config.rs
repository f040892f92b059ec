use serde::Deserialize;
use std::path::PathBuf;

/// Settings for the `crafter` binary, layered from a config file and `CRAFTER__*` variables.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrafterConfig {
    pub logging: LoggingConfig,
    pub share: ShareConfig,
    pub presets: PresetSources,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Write the file layer as JSON lines.
    pub json: bool,
    /// Enables a rolling log file in this directory.
    pub directory: Option<PathBuf>,
}

/// Share-link settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub base_url: String,
}

/// Preset bundles merged before the built-in catalogs are printed.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PresetSources {
    pub urls: Vec<String>,
    pub files: Vec<PathBuf>,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, directory: None }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self { base_url: "https://crafter.invalid/".to_owned() }
    }
}
