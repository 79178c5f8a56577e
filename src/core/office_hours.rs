use crate::db::log::ttlog_quiet;
use crate::db::office_hours::{delete_day, set_day_off, upsert_working_day};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::office_hours::{day_name, parse_day};
use crate::utils::time::{format_hm, parse_time};

/// Admin edits of the office-hours calendar.
pub struct OfficeHoursLogic;

impl OfficeHoursLogic {
    pub fn set(pool: &DbPool, day: &str, start: &str, end: &str) -> AppResult<u32> {
        let dow = parse_day(day)?;
        let start_t = parse_time(start).ok_or_else(|| AppError::InvalidTime(start.to_string()))?;
        let end_t = parse_time(end).ok_or_else(|| AppError::InvalidTime(end.to_string()))?;

        if end_t <= start_t {
            return Err(AppError::InvalidTime(format!(
                "End of office hours ({end}) must be later than start ({start})"
            )));
        }

        upsert_working_day(&pool.conn, dow, start_t, end_t)?;
        ttlog_quiet(
            &pool.conn,
            "office_hours",
            day_name(dow),
            &format!("Working day {}-{}", format_hm(start_t), format_hm(end_t)),
        );
        Ok(dow)
    }

    pub fn off(pool: &DbPool, day: &str) -> AppResult<u32> {
        let dow = parse_day(day)?;
        set_day_off(&pool.conn, dow)?;
        ttlog_quiet(&pool.conn, "office_hours", day_name(dow), "Marked as day off");
        Ok(dow)
    }

    /// Returns false when the day had no row.
    pub fn clear(pool: &DbPool, day: &str) -> AppResult<(u32, bool)> {
        let dow = parse_day(day)?;
        let removed = delete_day(&pool.conn, dow)? > 0;
        if removed {
            ttlog_quiet(&pool.conn, "office_hours", day_name(dow), "Configuration removed");
        }
        Ok((dow, removed))
    }
}
