use super::emit;
use anyhow::Result;
use crafter::domain::FIELDS;
use crafter::domain::flags::flag_for;
use std::fmt::Write;
use std::path::Path;

/// Lists every schema field with its kind and the flag that gates it.
pub(crate) fn run(output: Option<&Path>) -> Result<()> {
    let mut table = format!("{:<32} {:<16} {}", "FIELD", "KIND", "FLAG");
    for spec in FIELDS {
        write!(table, "\n{:<32} {:<16} {}", spec.name, spec.kind.as_str(), flag_for(spec.name).unwrap_or("-"))?;
    }
    emit(&table, output)
}
