//! extrapay library root.
//! Exposes the CLI parser, the high-level run() function, the payroll
//! calculator and the supporting modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::New { .. } => cli::commands::new::handle(&cli.command, cfg),
        Commands::Approve { .. } | Commands::Reject { .. } | Commands::Cancel { .. } => {
            cli::commands::status::handle(&cli.command, cfg)
        }
        Commands::Clock { .. } => cli::commands::clock::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Receipt { .. } => cli::commands::receipt::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line override of the data file
    if let Some(custom) = &cli.data {
        cfg.data_file = utils::path::expand_tilde(custom)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
