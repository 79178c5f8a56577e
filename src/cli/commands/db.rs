use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{applied_versions, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { migrate, check } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        if *migrate {
            info("Running migrations…");
            let applied = run_pending_migrations(&pool.conn)?;
            if applied == 0 {
                success("Database schema is up to date.");
            } else {
                success(format!("{applied} migration(s) applied."));
            }
            for v in applied_versions(&pool.conn)? {
                println!("  • {v}");
            }
        }

        if *check {
            info("Running integrity check…");

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                success("Integrity check passed.");
            } else {
                error(format!("Integrity check failed: {integrity}"));
            }
        }
    }

    Ok(())
}
