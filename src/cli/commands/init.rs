use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::migrate::init_db;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the config directory and file (skipped with `--test`), the
/// SQLite database and runs all pending migrations, which also seed the
/// default office hours.
pub fn handle(cli: &Cli) -> AppResult<()> {
    info("Initializing rOvertime…");

    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    let pool = DbPool::new(&cfg.database)?;
    let applied = init_db(&pool.conn)?;

    ttlog_quiet(
        &pool.conn,
        "init",
        &cfg.database,
        &format!("Database initialized ({applied} migration(s) applied)"),
    );

    success(format!(
        "Database initialized at {} ({applied} migration(s) applied)",
        &cfg.database
    ));
    Ok(())
}
