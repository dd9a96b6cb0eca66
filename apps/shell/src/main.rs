#![allow(clippy::print_stdout)]

mod args;
mod handlers;

use crate::args::{Cli, Commands};
use anyhow::{Context, Result};
use clap::Parser;
use hunt::domain::config::HuntConfig;
use hunt::kernel::config::load_config;
use hunt_logger::{FileSink, LevelFilter, Logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: HuntConfig = load_config(cli.config.as_deref())
        .with_context(|| match &cli.config {
            Some(path) => format!("Loading configuration from {}", path.display()),
            None => "Loading configuration".to_owned(),
        })?;
    let _logger = init_logger(&config, cli.verbose)?;

    match cli.command {
        Commands::Aspects {} => handlers::aspects(&config)?,
        Commands::Slots { slot } => handlers::slots(&config, slot.as_deref())?,
        Commands::Mock { kind, count, patches } => handlers::mock(kind, count, &patches)?,
        Commands::Normalize { kind, input } => handlers::normalize(kind, &input)?,
    }

    Ok(())
}

fn init_logger(config: &HuntConfig, verbose: bool) -> Result<Option<Logger>> {
    let logging = &config.logging;
    if !logging.console && logging.path.is_none() {
        return Ok(None);
    }

    let mut builder = Logger::builder()
        .name(env!("CARGO_BIN_NAME"))
        .console(logging.console)
        .json(logging.json)
        .level_str(&logging.level)?;
    if verbose {
        builder = builder.level(LevelFilter::DEBUG);
    }
    if let Some(filter) = &logging.env_filter {
        builder = builder.env_filter(filter);
    }
    if let Some(path) = &logging.path {
        builder = builder.file(FileSink::new(path));
    }

    Ok(Some(builder.init()?))
}
