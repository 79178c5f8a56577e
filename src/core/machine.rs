//! Overtime tracking state machine.
//!
//! `transition` is pure: it looks at the current state of an employee's
//! session and the requested action, and either describes the writes to
//! perform or rejects the action. `TrackerLogic` executes the writes.

use crate::core::admission::OfficeCalendar;
use crate::core::calculator::description::{derive_description, non_blank};
use crate::core::calculator::totals::{break_duration_seconds, compute_totals};
use crate::errors::{AppError, AppResult};
use crate::models::break_record::BreakRecord;
use crate::models::overtime_entry::OvertimeEntry;
use crate::models::overtime_type::OvertimeType;
use crate::models::session::{NewSession, SessionTotals, TrackingSession};
use crate::utils::clock::Moment;
use crate::utils::time::truncate_to_second;
use chrono::{DateTime, Utc};

/// Where an employee's session currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Running(TrackingSession),
    /// `open_break` is None only if the store is inconsistent.
    Paused {
        session: TrackingSession,
        open_break: Option<BreakRecord>,
    },
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Running(_) => "running",
            SessionState::Paused { .. } => "paused",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StartRequest {
    pub overtime_type: OvertimeType,
    pub project_id: Option<i64>,
    pub project_name: Option<String>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrackAction {
    Start(StartRequest),
    Pause,
    Resume,
    End,
}

impl TrackAction {
    /// Parse the `action` of an update request. Start has its own endpoint.
    pub fn parse_update(action: &str) -> AppResult<Self> {
        match action.trim().to_lowercase().as_str() {
            "pause" => Ok(TrackAction::Pause),
            "resume" => Ok(TrackAction::Resume),
            "end" => Ok(TrackAction::End),
            other => Err(AppError::InvalidAction(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TrackAction::Start(_) => "start",
            TrackAction::Pause => "pause",
            TrackAction::Resume => "resume",
            TrackAction::End => "end",
        }
    }
}

/// Writes implied by an accepted action.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Open(NewSession),
    Pause {
        session_id: i64,
        at: DateTime<Utc>,
    },
    Resume {
        session_id: i64,
        break_id: i64,
        at: DateTime<Utc>,
        break_seconds: i64,
    },
    Finalize {
        session: TrackingSession,
        entry: OvertimeEntry,
        totals: SessionTotals,
        at: DateTime<Utc>,
    },
}

pub fn transition(
    employee_id: &str,
    state: &SessionState,
    action: TrackAction,
    now: &Moment,
    calendar: &OfficeCalendar,
) -> AppResult<Transition> {
    match (state, action) {
        (SessionState::Idle, TrackAction::Start(req)) => {
            if !calendar.is_overtime_eligible(now.local.naive_local()) {
                return Err(AppError::InsideOfficeHours);
            }

            Ok(Transition::Open(NewSession {
                employee_id: employee_id.to_string(),
                project_id: req.project_id,
                project_name: non_blank(req.project_name.as_deref()),
                overtime_type: req.overtime_type,
                memo: non_blank(req.memo.as_deref()),
                start_time: now.utc,
            }))
        }
        (SessionState::Running(_) | SessionState::Paused { .. }, TrackAction::Start(_)) => {
            Err(AppError::SessionAlreadyActive)
        }

        (SessionState::Idle, TrackAction::Pause | TrackAction::Resume | TrackAction::End) => {
            Err(AppError::NoActiveSession)
        }

        (SessionState::Running(session), TrackAction::Pause) => Ok(Transition::Pause {
            session_id: session.id,
            at: now.utc,
        }),
        (SessionState::Paused { .. }, TrackAction::Pause) => Err(AppError::AlreadyPaused),

        (SessionState::Running(_), TrackAction::Resume) => Err(AppError::NotPaused),
        (SessionState::Paused { open_break: None, .. }, TrackAction::Resume) => {
            Err(AppError::NoActiveBreak)
        }
        (
            SessionState::Paused {
                session,
                open_break: Some(open),
            },
            TrackAction::Resume,
        ) => Ok(Transition::Resume {
            session_id: session.id,
            break_id: open.id,
            at: now.utc,
            break_seconds: break_duration_seconds(&open.break_start_time, &now.utc),
        }),

        (SessionState::Paused { .. }, TrackAction::End) => Err(AppError::EndWhilePaused),
        (SessionState::Running(session), TrackAction::End) => {
            let (entry, totals) = finalize(session, now);
            Ok(Transition::Finalize {
                session: session.clone(),
                entry,
                totals,
                at: now.utc,
            })
        }
    }
}

/// Ledger entry for a session ending at `now`. The entry is dated on the
/// session's start day; a session crossing midnight stays on that day.
pub fn finalize(session: &TrackingSession, now: &Moment) -> (OvertimeEntry, SessionTotals) {
    let totals = compute_totals(&session.start_time, &now.utc, session.total_break_seconds);
    let start_local = session.start_time.with_timezone(&now.local.timezone());

    let entry = OvertimeEntry::new(
        session.employee_id.clone(),
        session.project_id,
        start_local.date_naive(),
        session.overtime_type,
        truncate_to_second(start_local.time()),
        truncate_to_second(now.local.time()),
        totals.total_hours,
        totals.actual_working_hours,
        derive_description(
            session.project_id,
            session.project_name.as_deref(),
            session.memo.as_deref(),
        ),
    );

    (entry, totals)
}
