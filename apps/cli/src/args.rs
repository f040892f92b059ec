//! # CLI Argument Definitions
//!
//! The static surface is derived with `clap`; one `--<field> <value>` flag per schema
//! field is added at runtime from [`FIELDS`], so the CLI never drifts from the schema.

use clap::{Arg, ArgMatches, CommandFactory, Parser, Subcommand};
use crafter::domain::FIELDS;
use std::path::PathBuf;

const FIELD_HEADING: &str = "Option fields (before any subcommand)";

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "crafter")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build, validate, share and compile generator option sets")]
#[command(
    after_help = "Without --file or field flags, options JSON is read from stdin.\n\
                  Example: crafter --prompt \"a red fox\" --steps 40 --negative_prompt blurry"
)]
pub(crate) struct Cli {
    /// Config file (default: optional `crafter.{toml,json,yaml}` in the working directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Load options JSON from this file
    #[arg(short, long, value_name = "PATH")]
    pub(crate) file: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long, global = true, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long, global = true)]
    pub(crate) minify: bool,

    #[command(subcommand)]
    pub(crate) command: Option<Commands>,
}

/// Enumeration of available subcommands. Without one, the options are compiled.
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Print a share link for the loaded options
    Share {
        /// Load options JSON from this file
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
    /// Decode a share link
    Open {
        /// Link carrying a token in its fragment or `o` query parameter
        url: String,

        /// Print the full configuration, flags included, instead of the export
        #[arg(long)]
        full: bool,
    },
    /// Compile every item of a bulk payload
    Bulk {
        /// JSON array of option documents
        path: PathBuf,
    },
    /// Merge preset bundles into the built-in catalogs and print them
    Presets {
        /// Bundle URL (repeatable)
        #[arg(long = "url", value_name = "URL")]
        urls: Vec<String>,

        /// Bundle file (repeatable)
        #[arg(short, long = "file", value_name = "PATH")]
        files: Vec<PathBuf>,
    },
    /// List schema fields with their kind and gating flag
    Fields,
}

/// The full command: derived arguments plus one flag per schema field.
pub(crate) fn command() -> clap::Command {
    FIELDS.iter().fold(Cli::command(), |command, spec| {
        command.arg(
            Arg::new(spec.name)
                .long(spec.name)
                .value_name(spec.kind.as_str())
                .help_heading(FIELD_HEADING)
                .hide_short_help(true),
        )
    })
}

/// Field flags given on the command line, in schema order.
pub(crate) fn field_values(matches: &ArgMatches) -> Vec<(&'static str, String)> {
    FIELDS
        .iter()
        .filter_map(|spec| {
            matches.get_one::<String>(spec.name).map(|value| (spec.name, value.clone()))
        })
        .collect()
}
