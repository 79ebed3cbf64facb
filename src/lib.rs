//! wellnesslog library root.
//! Exposes the CLI parser, the high-level run() function and the logging
//! core (validator, classifier, entry log, reminder, spreadsheet writers).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None => cli::commands::session::handle(false, cfg),
        Some(Commands::Session { no_reminder }) => cli::commands::session::handle(*no_reminder, cfg),
        Some(Commands::Init) => cli::commands::init::handle(cli),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
        Some(cmd @ Commands::Add { .. }) => cli::commands::add::handle(cmd, cfg),
        Some(cmd @ Commands::Status { .. }) => cli::commands::status::handle(cmd),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // command-line overrides win over the config file
    if let Some(file) = &cli.append_file {
        cfg.append_file = file.clone();
    }
    if let Some(file) = &cli.export_file {
        cfg.export_file = file.clone();
    }

    log::debug!("effective configuration: {cfg:?}");

    dispatch(&cli, &cfg)
}
