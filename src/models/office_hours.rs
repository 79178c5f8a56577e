use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use serde::Serialize;

pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Declared office window for one weekday (Sunday = 0).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OfficeHoursDay {
    pub day_of_week: u32,       // ⇔ office_hours.day_of_week (0..=6)
    pub is_working_day: bool,   // ⇔ office_hours.is_working_day (0/1)
    pub start_time: NaiveTime,  // ⇔ office_hours.start_time ("HH:MM")
    pub end_time: NaiveTime,    // ⇔ office_hours.end_time ("HH:MM")
}

impl OfficeHoursDay {
    pub fn day_name(&self) -> &'static str {
        day_name(self.day_of_week)
    }
}

pub fn day_name(day_of_week: u32) -> &'static str {
    usize::try_from(day_of_week)
        .ok()
        .and_then(|i| DAY_NAMES.get(i))
        .copied()
        .unwrap_or("?")
}

/// Accepts 0..=6 or a (prefix of a) weekday name: "sun", "Monday", ...
pub fn parse_day(s: &str) -> AppResult<u32> {
    let raw = s.trim();

    if let Ok(n) = raw.parse::<u32>() {
        return if n <= 6 {
            Ok(n)
        } else {
            Err(AppError::InvalidDay(raw.to_string()))
        };
    }

    let lower = raw.to_lowercase();
    if lower.len() >= 3 {
        for (i, name) in DAY_NAMES.iter().enumerate() {
            if name.to_lowercase().starts_with(&lower) {
                return u32::try_from(i).map_err(|_| AppError::InvalidDay(raw.to_string()));
            }
        }
    }

    Err(AppError::InvalidDay(raw.to_string()))
}
