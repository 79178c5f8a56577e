//! Admission control: is a given instant outside declared office hours?

use crate::db::office_hours::load_office_hours;
use crate::errors::AppResult;
use crate::models::office_hours::OfficeHoursDay;
use crate::utils::time::truncate_to_minute;
use chrono::{Datelike, NaiveDateTime, NaiveTime};
use rusqlite::Connection;

/// Eligibility for one configured day.
///
/// - no row for the day → eligible (missing configuration never blocks overtime)
/// - off day → eligible
/// - working day → eligible only before `start_time` or from `end_time` on
///
/// `time_of_day` is compared at minute precision.
pub fn is_overtime_eligible(day: Option<&OfficeHoursDay>, time_of_day: NaiveTime) -> bool {
    let Some(day) = day else {
        return true;
    };

    if !day.is_working_day {
        return true;
    }

    let t = truncate_to_minute(time_of_day);
    t < day.start_time || t >= day.end_time
}

/// The weekly office-hours table, loaded once per request.
#[derive(Debug, Clone, Default)]
pub struct OfficeCalendar {
    days: Vec<OfficeHoursDay>,
}

impl OfficeCalendar {
    pub fn new(days: Vec<OfficeHoursDay>) -> Self {
        Self { days }
    }

    pub fn load(conn: &Connection) -> AppResult<Self> {
        Ok(Self::new(load_office_hours(conn)?))
    }

    /// Row for a weekday, Sunday = 0.
    pub fn day(&self, day_of_week: u32) -> Option<&OfficeHoursDay> {
        self.days.iter().find(|d| d.day_of_week == day_of_week)
    }

    pub fn days(&self) -> &[OfficeHoursDay] {
        &self.days
    }

    /// `local` must already be expressed in the office offset.
    pub fn is_overtime_eligible(&self, local: NaiveDateTime) -> bool {
        let dow = local.weekday().num_days_from_sunday();
        is_overtime_eligible(self.day(dow), local.time())
    }
}
