//! offwork library root.
//! Exposes the CLI parser, the high-level run() function and the
//! calculation modules behind the dashboard and stats views.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use chrono::NaiveDate;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use utils::date;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Settings { .. } => cli::commands::settings::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, today),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg, today),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, today),
        Commands::Dashboard => cli::commands::dashboard::handle(cfg, today),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg, today),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, today),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and shared by every handler
    let mut cfg = Config::load()?;

    logging::init_logging(&cfg.log_level, cli.verbose);

    if let Some(custom) = &cli.data_dir {
        cfg.data_dir = custom.clone();
    }

    let today = match &cli.today {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
        None => date::today(),
    };

    tracing::debug!(data_dir = %cfg.data_path().display(), %today, "starting");

    dispatch(&cli, &cfg, today)
}
