use super::{Input, emit, render};
use anyhow::{Context, Result};
use crafter::export::{generate_output, generate_output_compact};
use crafter::share::{share_link, try_options_from_url};
use std::path::Path;

/// Prints a link to `base_url` carrying the loaded options.
pub(crate) fn link(input: Input<'_>, base_url: &str, output: Option<&Path>) -> Result<()> {
    let options = input.load()?;
    let link = share_link(base_url, &options)
        .with_context(|| format!("Could not build a share link for {base_url}"))?;
    emit(&link, output)
}

/// Decodes a share link and prints its export, or the full configuration.
pub(crate) fn open(url: &str, full: bool, output: Option<&Path>, minify: bool) -> Result<()> {
    let options = try_options_from_url(url).context("Could not load options from link")?;
    let document = match (full, minify) {
        (true, _) => render(&options, minify)?,
        (false, true) => generate_output_compact(&options)?,
        (false, false) => generate_output(&options)?,
    };
    emit(&document, output)
}
