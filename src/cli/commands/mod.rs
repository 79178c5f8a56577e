pub mod account;
pub mod config;
pub mod db;
pub mod employee;
pub mod init;
pub mod log;
pub mod office_hours;
pub mod overtime;
pub mod project;
pub mod serve;
pub mod track;

use crate::config::Config;
use crate::db::migrate::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database, bringing its schema up to date first.
pub(crate) fn open_db(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}
