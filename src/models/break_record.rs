use chrono::{DateTime, Utc};
use serde::Serialize;

/// One pause inside a tracking session. Open while `break_end_time` is None.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BreakRecord {
    pub id: i64,
    pub tracking_id: i64,
    pub break_start_time: DateTime<Utc>,
    pub break_end_time: Option<DateTime<Utc>>,
    pub break_duration_seconds: Option<i64>,
}

impl BreakRecord {
    pub fn is_open(&self) -> bool {
        self.break_end_time.is_none()
    }
}
