#![allow(clippy::print_stderr, clippy::print_stdout)]

mod args;
mod handlers;

use crate::args::{Cli, Commands};
use crate::handlers::Input;
use anyhow::Context;
use clap::FromArgMatches;
use crafter::domain::config::{CrafterConfig, LoggingConfig};
use crafter::kernel::config::load_config;
use crafter_logger::{LevelFilter, Logger};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let matches = args::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());
    let fields = args::field_values(&matches);

    let config: CrafterConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _log = init_logging(&config.logging)?;

    let output = cli.output.as_deref();
    match cli.command {
        None => handlers::compile::run(Input { file: cli.file.as_deref(), fields }, output, cli.minify),
        Some(Commands::Share { file }) => handlers::share::link(
            Input { file: file.as_deref().or(cli.file.as_deref()), fields },
            &config.share.base_url,
            output,
        ),
        Some(Commands::Open { url, full }) => handlers::share::open(&url, full, output, cli.minify),
        Some(Commands::Bulk { path }) => handlers::bulk::run(&path, output, cli.minify),
        Some(Commands::Presets { urls, files }) => {
            let urls = [config.presets.urls, urls].concat();
            let files = [config.presets.files, files].concat();
            handlers::presets::run(&urls, &files, output, cli.minify).await
        },
        Some(Commands::Fields) => handlers::fields::run(output),
    }
}

fn init_logging(config: &LoggingConfig) -> anyhow::Result<Logger> {
    let level = config
        .level
        .parse::<LevelFilter>()
        .with_context(|| format!("Invalid log level `{}`", config.level))?;
    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).timestamps(false);

    let logger = match &config.directory {
        Some(directory) => builder.path(directory).json(config.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
