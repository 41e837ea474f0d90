use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use chrono::NaiveTime;

/// Fallback shift times used when one side of a day's punches is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftDefaults {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl ShiftDefaults {
    pub fn new(start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// Build from two "HH:MM" strings.
    pub fn from_strs(start: &str, end: &str) -> AppResult<Self> {
        let start_time = parse_time(start).ok_or_else(|| AppError::InvalidTime(start.to_string()))?;
        let end_time = parse_time(end).ok_or_else(|| AppError::InvalidTime(end.to_string()))?;
        Ok(Self::new(start_time, end_time))
    }
}
