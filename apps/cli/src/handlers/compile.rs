use super::{Input, emit};
use anyhow::{Context, Result};
use crafter::export::{generate_output, generate_output_compact};
use std::path::Path;

/// Compiles the loaded options into the export document.
pub(crate) fn run(input: Input<'_>, output: Option<&Path>, minify: bool) -> Result<()> {
    let options = input.load()?;
    let document = if minify {
        generate_output_compact(&options)
    } else {
        generate_output(&options)
    }
    .context("Could not compile options")?;
    emit(&document, output)
}
