// src/export/model.rs

use crate::models::record::{DailyRecord, MonthlyRecord};
use crate::utils::format_hours;
use serde::Serialize;

/// Flat, string-typed view of a day for JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub date: String,
    pub arrival: Option<String>,
    pub departure: Option<String>,
    pub worked_minutes: i64,
    pub worked_hours: String,
    pub warnings: Vec<String>,
}

/// One employee's month for JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub employee_id: String,
    pub month: String,
    pub total_minutes: i64,
    pub total_hours: String,
    pub days: Vec<DayExport>,
}

impl From<&DailyRecord> for DayExport {
    fn from(d: &DailyRecord) -> Self {
        Self {
            date: d.date_str(),
            arrival: d.arrival.map(|t| t.format("%H:%M").to_string()),
            departure: d.departure.map(|t| t.format("%H:%M").to_string()),
            worked_minutes: d.worked_minutes,
            worked_hours: format_hours(d.worked_minutes),
            warnings: d.warning_labels().into_iter().map(String::from).collect(),
        }
    }
}

impl From<&MonthlyRecord> for RecordExport {
    fn from(r: &MonthlyRecord) -> Self {
        Self {
            employee_id: r.employee_id.clone(),
            month: r.month.to_string(),
            total_minutes: r.total_minutes,
            total_hours: format_hours(r.total_minutes),
            // same day selection as the CSV export
            days: r.days_with_data().map(DayExport::from).collect(),
        }
    }
}
