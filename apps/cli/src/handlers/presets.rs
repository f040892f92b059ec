use super::{emit, render};
use anyhow::{Context, Result};
use crafter::presets::{PresetLibrary, PresetLoader, load_file};
use std::path::{Path, PathBuf};
use tracing::error;

/// Merges every bundle source into the built-in catalogs and prints the result.
///
/// A source that fails is reported and skipped; the catalogs keep whatever the other
/// sources added.
pub(crate) async fn run(
    urls: &[String],
    files: &[PathBuf],
    output: Option<&Path>,
    minify: bool,
) -> Result<()> {
    let mut library = PresetLibrary::builtin();

    if !urls.is_empty() {
        let loader = PresetLoader::new().context("Could not start the HTTP client")?;
        for url in urls {
            if let Err(err) = loader.load_into(&mut library, url).await {
                error!(kind = err.kind(), %url, "Preset bundle rejected");
                eprintln!("{err}");
            }
        }
    }

    for path in files {
        if let Err(err) = load_file(&mut library, path).await {
            error!(kind = err.kind(), path = %path.display(), "Preset bundle rejected");
            eprintln!("{err}");
        }
    }

    emit(&render(&library.export(), minify)?, output)
}
