use crate::db::ledger::{find_entry, load_entries, update_status};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::overtime_entry::OvertimeEntry;
use crate::models::overtime_status::OvertimeStatus;
use crate::utils::date::resolve_period;

/// Listing and review of the overtime ledger.
pub struct LedgerLogic;

impl LedgerLogic {
    pub fn list(
        pool: &DbPool,
        employee_id: Option<&str>,
        period: Option<&str>,
    ) -> AppResult<Vec<OvertimeEntry>> {
        let bounds = resolve_period(period)?;
        load_entries(&pool.conn, employee_id, bounds)
    }

    /// Approve or reject a pending entry.
    pub fn review(pool: &DbPool, id: i64, status: OvertimeStatus) -> AppResult<OvertimeEntry> {
        if status == OvertimeStatus::Pending {
            return Err(AppError::Other("An entry can only be approved or rejected".into()));
        }

        if find_entry(&pool.conn, id)?.is_none() {
            return Err(AppError::EntryNotFound(id));
        }

        if !update_status(&pool.conn, id, status)? {
            return Err(AppError::AlreadyReviewed(id));
        }

        ttlog_quiet(
            &pool.conn,
            "overtime_review",
            &id.to_string(),
            &format!("Overtime #{id} {}", status.to_db_str()),
        );

        find_entry(&pool.conn, id)?.ok_or(AppError::EntryNotFound(id))
    }

    pub fn total_hours(entries: &[OvertimeEntry]) -> (f64, f64) {
        entries.iter().fold((0.0, 0.0), |(total, worked), e| {
            (total + e.total_hours, worked + e.actual_working_hours)
        })
    }
}
