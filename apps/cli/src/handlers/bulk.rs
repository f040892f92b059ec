use super::emit;
use anyhow::{Context, Result};
use crafter::export::{generate_output, generate_output_compact};
use std::path::Path;

/// Compiles each valid item of a bulk payload; invalid items are reported on stderr.
///
/// Documents are separated by a blank line, or one per line with `minify`.
pub(crate) fn run(path: &Path, output: Option<&Path>, minify: bool) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;
    let report = crafter::import::import_bulk(&text)
        .with_context(|| format!("Could not load bulk payload {}", path.display()))?;

    for (index, err) in &report.rejected {
        eprintln!("item {index}: {err}");
    }

    let documents = report
        .imported
        .iter()
        .map(|options| if minify { generate_output_compact(options) } else { generate_output(options) })
        .collect::<Result<Vec<_>, _>>()?;

    let separator = if minify { "\n" } else { "\n\n" };
    emit(&documents.join(separator), output)
}
