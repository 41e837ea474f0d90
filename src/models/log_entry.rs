use super::direction::Direction;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// A single badge punch as read from the access-control log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub employee_id: String,
    pub timestamp: NaiveDateTime, // local wall-clock, no timezone
    pub direction: Direction,
}

impl LogEntry {
    pub fn new(employee_id: impl Into<String>, timestamp: NaiveDateTime, direction: Direction) -> Self {
        Self {
            employee_id: employee_id.into(),
            timestamp,
            direction,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Time of day truncated to the minute ("HH:MM" precision).
    pub fn clock_time(&self) -> NaiveTime {
        let t = self.timestamp.time();
        NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
    }

    /// Storage form, "YYYY-MM-DD HH:MM:SS".
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
