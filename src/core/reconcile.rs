//! Manual corrections of a single day.

use crate::core::calculator::worked_minutes;
use crate::errors::{AppError, AppResult};
use crate::models::record::{DailyRecord, MonthlyRecord};
use chrono::{NaiveDate, NaiveTime};

/// A user override of one time field. `None` clears the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeEdit {
    Arrival(Option<NaiveTime>),
    Departure(Option<NaiveTime>),
}

/// Apply `edit` to a copy of `record`, recompute its worked minutes and
/// mark it as manually edited.
///
/// The missing-IN / missing-OUT / multiple-logs flags describe the original
/// punches and are left as they were.
pub fn apply_edit(record: &DailyRecord, edit: TimeEdit) -> DailyRecord {
    let mut updated = record.clone();

    match edit {
        TimeEdit::Arrival(t) => updated.arrival = t,
        TimeEdit::Departure(t) => updated.departure = t,
    }

    updated.worked_minutes = worked_minutes(updated.arrival, updated.departure);
    updated.manually_edited = true;
    updated
}

impl MonthlyRecord {
    /// Apply `edit` to the day `date` and refresh the monthly total.
    pub fn apply_edit(&mut self, date: NaiveDate, edit: TimeEdit) -> AppResult<&DailyRecord> {
        let month = self.month;
        let idx = self
            .daily_records
            .iter()
            .position(|d| d.date == date)
            .ok_or_else(|| AppError::DateOutsideMonth {
                date: date.to_string(),
                month: month.to_string(),
            })?;

        self.daily_records[idx] = apply_edit(&self.daily_records[idx], edit);
        self.recompute_total();

        Ok(&self.daily_records[idx])
    }
}
