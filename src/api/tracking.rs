//! `/overtime-tracking`: read, start, and pause/resume/end the caller's timer.

use crate::config::Config;
use crate::core::machine::{StartRequest, TrackAction};
use crate::core::tracker::{TrackOutcome, TrackerLogic};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::overtime_type::OvertimeType;
use crate::models::session::SessionView;
use crate::utils::clock::Moment;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct CurrentSession {
    pub session: Option<SessionView>,
}

/// POST body. Fields stay loosely typed so that bad values map to 400s
/// with a readable message instead of a generic deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct StartBody {
    pub overtime_type: Option<String>,
    pub project_id: Option<i64>,
    pub project_name: Option<String>,
    pub memo: Option<String>,
}

impl StartBody {
    pub fn into_request(self) -> AppResult<StartRequest> {
        let raw = self.overtime_type.unwrap_or_default();
        let overtime_type = OvertimeType::from_db_str(raw.trim())
            .ok_or(AppError::InvalidOvertimeType(raw))?;

        Ok(StartRequest {
            overtime_type,
            project_id: self.project_id,
            project_name: self.project_name,
            memo: self.memo,
        })
    }
}

/// PUT body.
#[derive(Debug, Default, Deserialize)]
pub struct ActionBody {
    pub action: Option<String>,
}

fn parse_body<T: DeserializeOwned + Default>(body: &str) -> AppResult<T> {
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(body).map_err(|e| AppError::InvalidBody(e.to_string()))
}

/// GET: the active session or null.
pub fn current(pool: &DbPool, employee_id: &str) -> AppResult<CurrentSession> {
    Ok(CurrentSession {
        session: TrackerLogic::current(&pool.conn, employee_id)?,
    })
}

/// POST: start a session.
pub fn start(
    pool: &mut DbPool,
    cfg: &Config,
    employee_id: &str,
    body: &str,
    now: &Moment,
) -> AppResult<TrackOutcome> {
    let req = parse_body::<StartBody>(body)?.into_request()?;
    TrackerLogic::apply(pool, employee_id, TrackAction::Start(req), now, cfg.end_cleanup)
}

/// PUT: pause, resume or end the session.
pub fn update(
    pool: &mut DbPool,
    cfg: &Config,
    employee_id: &str,
    body: &str,
    now: &Moment,
) -> AppResult<TrackOutcome> {
    let body = parse_body::<ActionBody>(body)?;
    let action = TrackAction::parse_update(body.action.as_deref().unwrap_or_default())?;
    TrackerLogic::apply(pool, employee_id, action, now, cfg.end_cleanup)
}
