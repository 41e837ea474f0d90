//! CSV rendering of monthly records.

use crate::errors::{AppError, AppResult};
use crate::models::record::MonthlyRecord;
use crate::utils::format_hours;
use csv::Writer;

pub const CSV_HEADERS: [&str; 6] = [
    "Employee ID",
    "Date",
    "Arrival",
    "Departure",
    "Worked Hours",
    "Warnings",
];

const TOTAL_LABEL: &str = "TOTAL";
const WARNING_SEPARATOR: &str = "; ";

/// Render records as CSV text.
///
/// Layout: a header row, then for each employee one row per day that has an
/// arrival or a departure, a `TOTAL` row, and a blank separator line.
pub fn render_csv(records: &[MonthlyRecord]) -> AppResult<String> {
    let mut out = String::new();
    out.push_str(&write_rows(std::iter::once(CSV_HEADERS.map(String::from)))?);

    for record in records {
        let day_rows = record.days_with_data().map(|day| {
            [
                record.employee_id.clone(),
                day.date_str(),
                day.arrival_str(),
                day.departure_str(),
                format_hours(day.worked_minutes),
                day.warning_labels().join(WARNING_SEPARATOR),
            ]
        });

        let total_row = [
            record.employee_id.clone(),
            TOTAL_LABEL.to_string(),
            String::new(),
            String::new(),
            format_hours(record.total_minutes),
            String::new(),
        ];

        out.push_str(&write_rows(day_rows.chain(std::iter::once(total_row)))?);
        // blank separator; the csv writer has no notion of an empty line
        out.push('\n');
    }

    Ok(out)
}

fn write_rows<I>(rows: I) -> AppResult<String>
where
    I: IntoIterator<Item = [String; 6]>,
{
    let mut wtr = Writer::from_writer(Vec::new());

    for row in rows {
        wtr.write_record(&row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}
