use super::{break_record::BreakRecord, overtime_type::OvertimeType, project::ProjectSummary};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The single in-flight overtime timer of an employee
/// (⇔ one row of `overtime_tracking`, UNIQUE on employee_id).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrackingSession {
    pub id: i64,
    pub employee_id: String,
    pub project_id: Option<i64>,
    pub project_name: Option<String>,
    pub overtime_type: OvertimeType,
    pub memo: Option<String>,
    pub start_time: DateTime<Utc>,
    pub is_paused: bool,
    pub last_pause_time: Option<DateTime<Utc>>,
    pub total_break_seconds: i64,
    pub created_at: String,
}

/// Values needed to open a session; the row id is assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSession {
    pub employee_id: String,
    pub project_id: Option<i64>,
    pub project_name: Option<String>,
    pub overtime_type: OvertimeType,
    pub memo: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// Session joined with its project summary and open breaks, as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    #[serde(flatten)]
    pub session: TrackingSession,
    pub project: Option<ProjectSummary>,
    pub breaks: Vec<BreakRecord>,
}

/// Derived durations of a finished session.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SessionTotals {
    pub total_seconds: i64,
    pub total_break_seconds: i64,
    pub actual_working_seconds: i64,
    pub total_hours: f64,
    pub actual_working_hours: f64,
}

/// Last state of a session that was finalized into the ledger.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    #[serde(flatten)]
    pub session: TrackingSession,
    pub end_time: DateTime<Utc>,
    pub totals: SessionTotals,
}
