//! Derivation of monthly attendance records from badge punches.

use crate::core::calculator::worked_minutes;
use crate::models::log_entry::LogEntry;
use crate::models::month::YearMonth;
use crate::models::record::{DailyRecord, MonthlyRecord};
use crate::models::shift::ShiftDefaults;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Build one [`MonthlyRecord`] per employee with at least one punch in
/// `month`, ordered by employee ID.
///
/// Each record holds a [`DailyRecord`] for every day of the month. Missing
/// IN or OUT punches are filled from `defaults` and flagged.
pub fn generate_monthly_records(
    entries: &[LogEntry],
    month: YearMonth,
    defaults: &ShiftDefaults,
) -> Vec<MonthlyRecord> {
    // employee → day → punches
    let mut by_employee: BTreeMap<&str, BTreeMap<NaiveDate, Vec<&LogEntry>>> = BTreeMap::new();

    for entry in entries.iter().filter(|e| month.contains(e.date())) {
        by_employee
            .entry(entry.employee_id.as_str())
            .or_default()
            .entry(entry.date())
            .or_default()
            .push(entry);
    }

    let days = month.days();

    by_employee
        .into_iter()
        .map(|(employee_id, punches_by_day)| {
            let daily_records = days
                .iter()
                .map(|day| match punches_by_day.get(day) {
                    Some(punches) => build_daily_record(*day, punches, defaults),
                    None => DailyRecord::empty(*day),
                })
                .collect();

            MonthlyRecord::new(employee_id, month, daily_records)
        })
        .collect()
}

/// Pair one day's punches into a single arrival/departure record.
pub fn build_daily_record(date: NaiveDate, punches: &[&LogEntry], defaults: &ShiftDefaults) -> DailyRecord {
    let (ins, outs): (Vec<&LogEntry>, Vec<&LogEntry>) =
        punches.iter().copied().partition(|e| e.direction.is_in());

    if ins.is_empty() && outs.is_empty() {
        return DailyRecord::empty(date);
    }

    let has_multiple_logs = ins.len() > 1 || outs.len() > 1;

    let first_in = ins.iter().min_by_key(|e| e.timestamp);
    let last_out = outs.iter().max_by_key(|e| e.timestamp);

    let (arrival, missing_in) = match first_in {
        Some(e) => (e.clock_time(), false),
        None => (defaults.start_time, true),
    };

    let (departure, missing_out) = match last_out {
        Some(e) => (e.clock_time(), false),
        None => (defaults.end_time, true),
    };

    DailyRecord {
        date,
        arrival: Some(arrival),
        departure: Some(departure),
        worked_minutes: worked_minutes(Some(arrival), Some(departure)),
        missing_in,
        missing_out,
        has_multiple_logs,
        manually_edited: false,
    }
}
