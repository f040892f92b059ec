pub(crate) mod bulk;
pub(crate) mod compile;
pub(crate) mod fields;
pub(crate) mod presets;
pub(crate) mod share;

use anyhow::{Context, Result, bail};
use crafter::domain::Options;
use crafter::import::{options_from_args, reconstruct_options};
use std::io::{IsTerminal, Read};
use std::path::Path;
use tracing::debug;

/// Where the options of a command come from.
#[derive(Debug)]
pub(crate) struct Input<'a> {
    pub(crate) file: Option<&'a Path>,
    pub(crate) fields: Vec<(&'static str, String)>,
}

impl Input<'_> {
    /// Loads options from field flags, a file, or stdin, in that order of exclusivity.
    pub(crate) fn load(self) -> Result<Options> {
        match (self.file, self.fields.is_empty()) {
            (Some(_), false) => bail!("Use either --file or field flags, not both"),
            (Some(path), true) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Could not read {}", path.display()))?;
                reconstruct_options(&text)
                    .with_context(|| format!("Could not load options from {}", path.display()))
            },
            (None, false) => options_from_args(self.fields).context("Could not load options"),
            (None, true) => from_stdin(),
        }
    }
}

fn from_stdin() -> Result<Options> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        debug!("No input given, using defaults");
        return Ok(Options::default());
    }

    let mut text = String::new();
    stdin.read_to_string(&mut text).context("Could not read stdin")?;
    if text.trim().is_empty() {
        return Ok(Options::default());
    }
    reconstruct_options(&text).context("Could not load options from stdin")
}

/// Writes `text` to `output`, or to stdout followed by a newline.
pub(crate) fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{text}\n"))
                .with_context(|| format!("Could not write {}", path.display()))?;
            debug!(path = %path.display(), "Output written");
        },
        None => println!("{text}"),
    }
    Ok(())
}

/// Pretty or single-line JSON.
pub(crate) fn render<T: serde::Serialize + ?Sized>(value: &T, minify: bool) -> Result<String> {
    let text = if minify { serde_json::to_string(value)? } else { serde_json::to_string_pretty(value)? };
    Ok(text)
}
