//! Printable monthly report: one table per employee.

use crate::models::record::{DailyRecord, MonthlyRecord};
use crate::utils::colors::{color_for_time_cell, colorize};
use crate::utils::format_hours;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};

const EMPTY_CELL: &str = "—";

/// Short notes shown in the report's last column.
fn notes(day: &DailyRecord) -> String {
    let mut notes = Vec::new();
    if day.missing_in {
        notes.push("No IN");
    }
    if day.missing_out {
        notes.push("No OUT");
    }
    if day.has_multiple_logs {
        notes.push("Multiple logs");
    }
    if day.manually_edited {
        notes.push("Edited");
    }
    notes.join(", ")
}

fn time_cell(value: String, inferred: bool) -> String {
    let shown = if value.is_empty() { EMPTY_CELL.to_string() } else { value };
    let color = color_for_time_cell(&shown, inferred);
    colorize(&shown, color)
}

/// Title line: display name when known, otherwise the badge ID.
pub fn employee_title(record: &MonthlyRecord, name: Option<&str>) -> String {
    match name {
        Some(n) => format!("{} (ID: {})", n, record.employee_id),
        None => format!("Employee {}", record.employee_id),
    }
}

/// Render one employee's month. Days without any time are left out.
pub fn render_record(record: &MonthlyRecord, name: Option<&str>) -> String {
    let mut table = Table::new(vec![
        Column::left("Date", 10),
        Column::left("Day", 4),
        Column::left("Arrival", 8),
        Column::left("Departure", 9),
        Column::right("Hours", 6),
        Column::left("Notes", 0),
    ]);

    for day in record.days_with_data() {
        table.add_row(vec![
            day.date_str(),
            crate::utils::date::weekday_short(day.date),
            time_cell(day.arrival_str(), day.missing_in),
            time_cell(day.departure_str(), day.missing_out),
            format_hours(day.worked_minutes),
            notes(day),
        ]);
    }

    table.set_footer(vec![
        "Total".to_string(),
        String::new(),
        String::new(),
        String::new(),
        bold(&format_hours(record.total_minutes)),
        String::new(),
    ]);

    format!(
        "{}\n{}\n\n{}",
        bold(&employee_title(record, name)),
        record.month.long_name(),
        table.render()
    )
}
