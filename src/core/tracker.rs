use crate::config::CleanupPolicy;
use crate::core::admission::OfficeCalendar;
use crate::core::machine::{SessionState, TrackAction, Transition, transition};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::{breaks, employees, ledger, projects, sessions};
use crate::errors::{AppError, AppResult};
use crate::models::break_record::BreakRecord;
use crate::models::overtime_entry::OvertimeEntry;
use crate::models::session::{SessionSnapshot, SessionView, TrackingSession};
use crate::utils::clock::Moment;
use rusqlite::Connection;
use serde::Serialize;
use tracing::{info, warn};

/// Result of an accepted tracking action.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TrackOutcome {
    Started {
        session: SessionView,
    },
    Paused {
        session: SessionView,
        #[serde(rename = "break")]
        opened: BreakRecord,
    },
    Resumed {
        session: SessionView,
    },
    Ended {
        entry: OvertimeEntry,
        session: SessionSnapshot,
    },
}

/// High-level business logic for the overtime timer.
pub struct TrackerLogic;

impl TrackerLogic {
    /// Current state of the employee's session, with its open break if paused.
    pub fn load_state(conn: &Connection, employee_id: &str) -> AppResult<SessionState> {
        let Some(session) = sessions::find_by_employee(conn, employee_id)? else {
            return Ok(SessionState::Idle);
        };

        if session.is_paused {
            let open_break = breaks::find_open_break(conn, session.id)?;
            Ok(SessionState::Paused {
                session,
                open_break,
            })
        } else {
            Ok(SessionState::Running(session))
        }
    }

    /// The active session joined with project summary and open breaks.
    pub fn current(conn: &Connection, employee_id: &str) -> AppResult<Option<SessionView>> {
        match sessions::find_by_employee(conn, employee_id)? {
            Some(session) => Ok(Some(Self::view(conn, session)?)),
            None => Ok(None),
        }
    }

    fn view(conn: &Connection, session: TrackingSession) -> AppResult<SessionView> {
        let project = match session.project_id {
            Some(id) => projects::find_summary(conn, id)?,
            None => None,
        };
        let breaks = breaks::load_open_breaks(conn, session.id)?;

        Ok(SessionView {
            session,
            project,
            breaks,
        })
    }

    fn reload(conn: &Connection, session_id: i64) -> AppResult<SessionView> {
        let session = sessions::find_by_id(conn, session_id)?.ok_or(AppError::NoActiveSession)?;
        Self::view(conn, session)
    }

    /// Validate, transition and persist one action for `employee_id`.
    ///
    /// Every multi-row mutation runs inside one transaction.
    pub fn apply(
        pool: &mut DbPool,
        employee_id: &str,
        action: TrackAction,
        now: &Moment,
        cleanup: CleanupPolicy,
    ) -> AppResult<TrackOutcome> {
        if !employees::employee_exists(&pool.conn, employee_id)? {
            return Err(AppError::UnknownEmployee(employee_id.to_string()));
        }

        if let TrackAction::Start(req) = &action
            && let Some(pid) = req.project_id
            && projects::find_project(&pool.conn, pid)?.is_none()
        {
            return Err(AppError::UnknownProject(pid));
        }

        let action_name = action.name();
        let state = Self::load_state(&pool.conn, employee_id)?;
        let calendar = OfficeCalendar::load(&pool.conn)?;

        let step = transition(employee_id, &state, action, now, &calendar).inspect_err(|e| {
            info!(
                employee_id,
                action = action_name,
                state = state.name(),
                reason = %e,
                "tracking action rejected"
            );
        })?;

        let tx = pool.conn.transaction()?;

        let outcome = match step {
            Transition::Open(new) => {
                let session = sessions::insert_session(&tx, &new)?;
                ttlog_quiet(
                    &tx,
                    "track_start",
                    employee_id,
                    &format!(
                        "Started {} overtime at {}",
                        session.overtime_type.to_db_str(),
                        now.local.to_rfc3339()
                    ),
                );
                TrackOutcome::Started {
                    session: Self::view(&tx, session)?,
                }
            }

            Transition::Pause { session_id, at } => {
                let opened = breaks::open_break(&tx, session_id, &at)?;
                sessions::mark_paused(&tx, session_id, &at)?;
                ttlog_quiet(
                    &tx,
                    "track_pause",
                    employee_id,
                    &format!("Break #{} opened at {}", opened.id, now.local.to_rfc3339()),
                );
                TrackOutcome::Paused {
                    session: Self::reload(&tx, session_id)?,
                    opened,
                }
            }

            Transition::Resume {
                session_id,
                break_id,
                at,
                break_seconds,
            } => {
                breaks::close_break(&tx, break_id, &at, break_seconds)?;
                sessions::mark_resumed(&tx, session_id, break_seconds)?;
                ttlog_quiet(
                    &tx,
                    "track_resume",
                    employee_id,
                    &format!("Break #{break_id} closed after {break_seconds}s"),
                );
                TrackOutcome::Resumed {
                    session: Self::reload(&tx, session_id)?,
                }
            }

            Transition::Finalize {
                session,
                entry,
                totals,
                at,
            } => {
                let entry = ledger::insert_entry(&tx, &entry)?;

                if let Err(e) = sessions::delete_session(&tx, session.id) {
                    match cleanup {
                        CleanupPolicy::Strict => return Err(e),
                        CleanupPolicy::BestEffort => {
                            warn!(
                                employee_id,
                                session_id = session.id,
                                entry_id = entry.id,
                                error = %e,
                                "ledger entry saved but tracking session was not deleted"
                            );
                            ttlog_quiet(
                                &tx,
                                "track_cleanup_failed",
                                employee_id,
                                &format!("Session #{} left behind: {e}", session.id),
                            );
                        }
                    }
                }

                ttlog_quiet(
                    &tx,
                    "track_end",
                    employee_id,
                    &format!(
                        "Overtime #{} recorded: {:.2}h total, {:.2}h worked",
                        entry.id, entry.total_hours, entry.actual_working_hours
                    ),
                );

                TrackOutcome::Ended {
                    entry,
                    session: SessionSnapshot {
                        session,
                        end_time: at,
                        totals,
                    },
                }
            }
        };

        tx.commit()?;

        info!(employee_id, action = action_name, "tracking action applied");
        Ok(outcome)
    }
}
