use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

const DEFAULT_CONFIG_NAME: &str = "crafter";
const ENV_PREFIX: &str = "CRAFTER";
const LIST_KEYS: &[&str] = &["presets.urls", "presets.files"];

#[crafter_derive::crafter_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration by layering a file with `CRAFTER__*` environment variables.
///
/// 1. **File**: `path` when given (must exist), otherwise an optional `crafter.{toml,json,yaml,...}`
///    in the working directory.
/// 2. **Environment**: variables prefixed with `CRAFTER__`; `__` separates nesting levels
///    (`CRAFTER__SHARE__BASE_URL` maps to `share.base_url`). `presets.urls` and
///    `presets.files` accept comma-separated lists.
///
/// # Errors
/// Returns [`ConfigError::Config`] when an explicit file is missing, a source cannot be
/// parsed, or the merged values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use crafter_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     level: String,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/missing.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// [`load_config`] with an explicit environment instead of the process environment.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<config::Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(path) => {
            debug!("Loading config from {}", path.as_ref().display());
            File::from(path.as_ref()).required(true)
        },
        None => {
            debug!("Looking for optional config file `{DEFAULT_CONFIG_NAME}.*`");
            File::with_name(DEFAULT_CONFIG_NAME).required(false)
        },
    };

    let environment = LIST_KEYS.iter().fold(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .convert_case(config::Case::Snake)
            .try_parsing(true)
            .list_separator(","),
        |environment, key| environment.with_list_parse_key(key),
    );

    let config = Config::builder()
        .add_source(file)
        .add_source(environment.source(env))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
