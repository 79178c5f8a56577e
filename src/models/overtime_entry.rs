use super::{overtime_status::OvertimeStatus, overtime_type::OvertimeType};
use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// Durable overtime record (⇔ one row of `overtime`).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OvertimeEntry {
    pub id: i64,
    pub employee_id: String,
    pub project_id: Option<i64>,
    pub date: NaiveDate,           // ⇔ overtime.date ("YYYY-MM-DD")
    pub overtime_type: OvertimeType,
    pub start_time: NaiveTime,     // ⇔ overtime.start_time ("HH:MM:SS")
    pub end_time: NaiveTime,       // ⇔ overtime.end_time ("HH:MM:SS")
    pub total_hours: f64,
    pub actual_working_hours: f64,
    pub description: Option<String>,
    pub status: OvertimeStatus,
    pub created_at: String,
}

impl OvertimeEntry {
    /// Build a not-yet-saved entry (`id = 0`, status pending).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        employee_id: String,
        project_id: Option<i64>,
        date: NaiveDate,
        overtime_type: OvertimeType,
        start_time: NaiveTime,
        end_time: NaiveTime,
        total_hours: f64,
        actual_working_hours: f64,
        description: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            employee_id,
            project_id,
            date,
            overtime_type,
            start_time,
            end_time,
            total_hours,
            actual_working_hours,
            description,
            status: OvertimeStatus::Pending,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M:%S").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M:%S").to_string()
    }
}
