//! Access-control log parser.
//!
//! Input is tab-separated text, one punch per line:
//! `employee_id \t timestamp \t (unused) \t direction_code [\t ...]`.
//! Malformed lines are skipped with a warning; parsing only fails when
//! nothing usable is left.

use crate::errors::{AppError, AppResult};
use crate::models::direction::Direction;
use crate::models::log_entry::LogEntry;
use chrono::{DateTime, Local, NaiveDateTime};
use std::fmt;
use thiserror::Error;

const MIN_FIELDS: usize = 4;

const FIELD_EMPLOYEE: usize = 0;
const FIELD_TIMESTAMP: usize = 1;
const FIELD_DIRECTION: usize = 3;

/// Offset-qualified layouts that RFC 3339 parsing rejects (no seconds).
/// `%#z` also takes a bare `Z`.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%#z", "%Y-%m-%d %H:%M%#z"];

/// Timestamp layouts accepted in the second column.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y.%m.%d %H:%M:%S",
    "%Y.%m.%d %H:%M",
    "%Y.%m.%d. %H:%M:%S",
    "%Y.%m.%d. %H:%M",
];

/// Why a line was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("expected at least 4 fields, found {0}")]
    TooFewFields(usize),

    #[error("empty employee ID")]
    EmptyEmployeeId,

    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("invalid direction code '{0}'")]
    InvalidDirection(String),
}

/// A recoverable problem on a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWarning {
    /// 1-based line number in the input.
    pub line: usize,
    pub reason: SkipReason,
}

impl fmt::Display for LineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.reason)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub entries: Vec<LogEntry>,
    pub skipped_lines: usize,
    pub warnings: Vec<LineWarning>,
}

/// Parse raw log text into entries, in input order.
///
/// Blank lines are ignored without a warning. Returns
/// [`AppError::NoValidEntries`] when not a single line could be used.
pub fn parse_log(content: &str) -> AppResult<ParseOutcome> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut outcome = ParseOutcome::default();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(entry) => outcome.entries.push(entry),
            Err(reason) => {
                outcome.skipped_lines += 1;
                outcome.warnings.push(LineWarning {
                    line: idx + 1,
                    reason,
                });
            }
        }
    }

    if outcome.entries.is_empty() {
        return Err(AppError::NoValidEntries);
    }

    Ok(outcome)
}

fn parse_line(line: &str) -> Result<LogEntry, SkipReason> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return Err(SkipReason::TooFewFields(fields.len()));
    }

    let employee_id = fields[FIELD_EMPLOYEE].trim();
    if employee_id.is_empty() {
        return Err(SkipReason::EmptyEmployeeId);
    }

    let raw_ts = fields[FIELD_TIMESTAMP].trim();
    let timestamp =
        parse_timestamp(raw_ts).ok_or_else(|| SkipReason::InvalidTimestamp(raw_ts.to_string()))?;

    let code = fields[FIELD_DIRECTION].trim();
    let direction =
        Direction::from_code(code).ok_or_else(|| SkipReason::InvalidDirection(code.to_string()))?;

    Ok(LogEntry::new(employee_id, timestamp, direction))
}

/// Parse a reader timestamp into local wall-clock time.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(ts) = TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(ts);
    }

    // Offset-qualified stamps are shown in local time
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .or_else(|| {
            OFFSET_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
        })
        .map(|dt| dt.with_timezone(&Local).naive_local())
}
