use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::server::{self, AppState};
use crate::ui::messages::info;
use crate::utils::clock::Clock;
use std::sync::Arc;

pub fn handle(cmd: &Commands, cfg: &Config, clock: Arc<dyn Clock>) -> AppResult<()> {
    if let Commands::Serve { bind } = cmd {
        // Migrate once up front; requests then only open connections.
        drop(open_db(cfg)?);

        let bind = bind.clone().unwrap_or_else(|| cfg.bind_address.clone());
        info(format!("Serving /overtime-tracking on {bind} (db: {})", cfg.database));

        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(server::serve(AppState::new(cfg.clone(), clock), &bind))?;
    }

    Ok(())
}
