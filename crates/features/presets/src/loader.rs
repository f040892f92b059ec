use crate::error::{PresetError, PresetErrorExt};
use crate::library::{MergeReport, PresetLibrary};
use crafter_kernel::validation::describe;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// Fetches preset bundles over HTTP and from local files.
///
/// Every failure (network, status, body, shape) is returned before the library is
/// touched, so a failed load never leaves catalogs half merged.
#[derive(Debug, Clone)]
pub struct PresetLoader {
    client: reqwest::Client,
}

impl PresetLoader {
    /// # Errors
    /// [`PresetError::Network`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, PresetError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("crafter/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Building HTTP client")?;
        Ok(Self { client })
    }

    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Downloads `url` and checks that the body is a JSON object.
    ///
    /// # Errors
    /// [`PresetError::Network`], [`PresetError::HttpStatus`], [`PresetError::Json`] or
    /// [`PresetError::NotAnObject`].
    pub async fn fetch(&self, url: &str) -> Result<Value, PresetError> {
        debug!(%url, "Fetching preset bundle");
        let response = self.client.get(url).send().await.context(url.to_owned())?;

        let status = response.status();
        if !status.is_success() {
            return Err(PresetError::HttpStatus {
                url: url.to_owned(),
                status: status.as_u16(),
                context: None,
            });
        }

        let body = response.bytes().await.context(url.to_owned())?;
        let bundle = serde_json::from_slice::<Value>(&body).context(url.to_owned())?;
        ensure_object(bundle)
    }

    /// Fetches `url` and merges it into `library`.
    ///
    /// # Errors
    /// See [`fetch`](Self::fetch); the library is unchanged on error.
    pub async fn load_into(
        &self,
        library: &mut PresetLibrary,
        url: &str,
    ) -> Result<MergeReport, PresetError> {
        let bundle = self.fetch(url).await?;
        let report = library.import_bundle(&bundle)?;
        info!(%url, added = report.added, "Custom presets loaded");
        Ok(report)
    }
}

/// Reads a bundle file and merges it into `library`.
///
/// # Errors
/// [`PresetError::Io`], [`PresetError::Json`] or [`PresetError::NotAnObject`]; the
/// library is unchanged on error.
pub async fn load_file(
    library: &mut PresetLibrary,
    path: impl AsRef<Path>,
) -> Result<MergeReport, PresetError> {
    let path = path.as_ref();
    let label = path.display().to_string();

    let text = tokio::fs::read_to_string(path).await.context(label.clone())?;
    let bundle = serde_json::from_str::<Value>(&text).context(label.clone())?;
    let report = library.import_bundle(&ensure_object(bundle)?)?;
    info!(path = %label, added = report.added, "Custom presets loaded");
    Ok(report)
}

fn ensure_object(bundle: Value) -> Result<Value, PresetError> {
    if bundle.is_object() {
        Ok(bundle)
    } else {
        Err(PresetError::NotAnObject { found: describe(&bundle), context: None })
    }
}
