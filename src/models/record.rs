use super::month::YearMonth;
use chrono::{NaiveDate, NaiveTime};

/// Warning labels, in the order they are reported.
pub const LABEL_MISSING_IN: &str = "Missing IN";
pub const LABEL_MISSING_OUT: &str = "Missing OUT";
pub const LABEL_MULTIPLE_LOGS: &str = "Multiple logs";
pub const LABEL_MANUALLY_EDITED: &str = "Manually edited";

/// Attendance for one employee on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub arrival: Option<NaiveTime>,
    pub departure: Option<NaiveTime>,
    pub worked_minutes: i64,
    pub missing_in: bool,
    pub missing_out: bool,
    pub has_multiple_logs: bool,
    pub manually_edited: bool,
}

impl DailyRecord {
    /// A day without any punch.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            arrival: None,
            departure: None,
            worked_minutes: 0,
            missing_in: false,
            missing_out: false,
            has_multiple_logs: false,
            manually_edited: false,
        }
    }

    pub fn has_data(&self) -> bool {
        self.arrival.is_some() || self.departure.is_some()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn arrival_str(&self) -> String {
        self.arrival
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }

    pub fn departure_str(&self) -> String {
        self.departure
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }

    /// Applicable warning labels in fixed order.
    pub fn warning_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.missing_in {
            labels.push(LABEL_MISSING_IN);
        }
        if self.missing_out {
            labels.push(LABEL_MISSING_OUT);
        }
        if self.has_multiple_logs {
            labels.push(LABEL_MULTIPLE_LOGS);
        }
        if self.manually_edited {
            labels.push(LABEL_MANUALLY_EDITED);
        }
        labels
    }
}

/// One employee's daily records for a whole month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyRecord {
    pub employee_id: String,
    pub month: YearMonth,
    pub daily_records: Vec<DailyRecord>,
    pub total_minutes: i64,
}

impl MonthlyRecord {
    pub fn new(employee_id: impl Into<String>, month: YearMonth, daily_records: Vec<DailyRecord>) -> Self {
        let total_minutes = daily_records.iter().map(|d| d.worked_minutes).sum();
        Self {
            employee_id: employee_id.into(),
            month,
            daily_records,
            total_minutes,
        }
    }

    pub fn recompute_total(&mut self) {
        self.total_minutes = self.daily_records.iter().map(|d| d.worked_minutes).sum();
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.daily_records.iter().find(|d| d.date == date)
    }

    /// Days that carry at least one time.
    pub fn days_with_data(&self) -> impl Iterator<Item = &DailyRecord> {
        self.daily_records.iter().filter(|d| d.has_data())
    }
}
