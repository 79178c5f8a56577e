//! rOvertime library root.
//! Exposes the CLI parser, the HTTP router, the high-level run() function,
//! and the internal modules.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod server;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use utils::clock::{Clock, FixedClock, Moment, SystemClock};
use utils::time::parse_timestamp;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, clock: Arc<dyn Clock>) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Employee { .. } => cli::commands::employee::handle(&cli.command, cfg),
        Commands::Account { .. } => cli::commands::account::handle(&cli.command, cfg),
        Commands::Project { .. } => cli::commands::project::handle(&cli.command, cfg),
        Commands::OfficeHours { .. } => cli::commands::office_hours::handle(&cli.command, cfg),
        Commands::Track { .. } => {
            let now = Moment::from_clock(clock.as_ref(), cfg.office_offset()?);
            cli::commands::track::handle(&cli.command, cfg, &now)
        }
        Commands::Overtime { .. } => cli::commands::overtime::handle(&cli.command, cfg),
        Commands::Serve { .. } => cli::commands::serve::handle(&cli.command, cfg, clock),
    }
}

/// `--now` pins the clock; otherwise the system clock is used.
fn clock_for(cli: &Cli) -> AppResult<Arc<dyn Clock>> {
    match &cli.now {
        Some(raw) => {
            let at = parse_timestamp(raw)
                .ok_or_else(|| AppError::InvalidDate(format!("--now {raw}")))?;
            Ok(Arc::new(FixedClock::new(at)))
        }
        None => Ok(Arc::new(SystemClock)),
    }
}

/// Diagnostics go to stderr so they never mix with command output.
/// `RUST_LOG` overrides the default level.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. in tests) is harmless.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let level = if matches!(cli.command, Commands::Serve { .. }) {
        "info"
    } else {
        "warn"
    };
    init_tracing(level);

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let clock = clock_for(&cli)?;
    dispatch(&cli, &cfg, clock)
}
