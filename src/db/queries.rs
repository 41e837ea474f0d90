use crate::errors::{AppError, AppResult};
use crate::models::direction::Direction;
use crate::models::log_entry::LogEntry;
use crate::models::month::YearMonth;
use crate::models::record::{DailyRecord, MonthlyRecord};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::collections::BTreeMap;

const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

// ---------------------------
// Log entries
// ---------------------------

/// Replace the stored punches with a freshly imported set.
pub fn replace_log_entries(conn: &mut Connection, entries: &[LogEntry]) -> AppResult<usize> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM log_entries", [])?;

    {
        let mut stmt = tx.prepare(
            "INSERT INTO log_entries (employee_id, timestamp, direction)
             VALUES (?1, ?2, ?3)",
        )?;
        for e in entries {
            stmt.execute(params![
                e.employee_id,
                e.timestamp_str(),
                e.direction.to_db_str(),
            ])?;
        }
    }

    tx.commit()?;
    Ok(entries.len())
}

pub fn map_entry_row(row: &Row) -> rusqlite::Result<LogEntry> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp = NaiveDateTime::parse_from_str(&ts_str, TS_FORMAT)
        .map_err(|_| conversion_error(1, AppError::InvalidDate(ts_str.clone())))?;

    let dir_str: String = row.get("direction")?;
    let direction = Direction::from_db_str(&dir_str)
        .ok_or_else(|| conversion_error(2, AppError::InvalidDirection(dir_str.clone())))?;

    Ok(LogEntry {
        employee_id: row.get("employee_id")?,
        timestamp,
        direction,
    })
}

/// All stored punches, in import order.
pub fn load_log_entries(conn: &Connection) -> AppResult<Vec<LogEntry>> {
    let mut stmt =
        conn.prepare("SELECT employee_id, timestamp, direction FROM log_entries ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_entry_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Monthly records
// ---------------------------

pub fn month_has_records(conn: &Connection, month: YearMonth) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM monthly_records WHERE month = ?1 LIMIT 1")?;
    Ok(stmt.exists([month.to_string()])?)
}

fn insert_monthly_record(conn: &Connection, record: &MonthlyRecord, generated_at: &str) -> AppResult<()> {
    let month = record.month.to_string();

    conn.execute(
        "INSERT INTO monthly_records (employee_id, month, total_minutes, generated_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![record.employee_id, month, record.total_minutes, generated_at],
    )?;

    let mut stmt = conn.prepare_cached(
        "INSERT INTO daily_records
            (employee_id, month, date, arrival, departure, worked_minutes,
             missing_in, missing_out, multiple_logs, manually_edited)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
    )?;

    for day in &record.daily_records {
        stmt.execute(params![
            record.employee_id,
            month,
            day.date_str(),
            day.arrival.map(|t| t.format("%H:%M").to_string()),
            day.departure.map(|t| t.format("%H:%M").to_string()),
            day.worked_minutes,
            day.missing_in,
            day.missing_out,
            day.has_multiple_logs,
            day.manually_edited,
        ])?;
    }

    Ok(())
}

fn delete_month(conn: &Connection, month: YearMonth) -> AppResult<()> {
    let m = month.to_string();
    conn.execute("DELETE FROM daily_records WHERE month = ?1", [&m])?;
    conn.execute("DELETE FROM monthly_records WHERE month = ?1", [&m])?;
    Ok(())
}

/// Replace every stored record of `month` (manual edits included).
pub fn replace_month_records(
    conn: &mut Connection,
    month: YearMonth,
    records: &[MonthlyRecord],
) -> AppResult<()> {
    let generated_at = Local::now().to_rfc3339();
    let tx = conn.transaction()?;

    delete_month(&tx, month)?;
    for r in records {
        insert_monthly_record(&tx, r, &generated_at)?;
    }

    tx.commit()?;
    Ok(())
}

/// Overwrite one employee's record for its month.
pub fn save_monthly_record(conn: &mut Connection, record: &MonthlyRecord) -> AppResult<()> {
    let month = record.month.to_string();
    let tx = conn.transaction()?;

    let generated_at: String = tx
        .query_row(
            "SELECT generated_at FROM monthly_records WHERE employee_id = ?1 AND month = ?2",
            params![record.employee_id, month],
            |row| row.get(0),
        )
        .optional()?
        .unwrap_or_else(|| Local::now().to_rfc3339());

    tx.execute(
        "DELETE FROM daily_records WHERE employee_id = ?1 AND month = ?2",
        params![record.employee_id, month],
    )?;
    tx.execute(
        "DELETE FROM monthly_records WHERE employee_id = ?1 AND month = ?2",
        params![record.employee_id, month],
    )?;
    insert_monthly_record(&tx, record, &generated_at)?;

    tx.commit()?;
    Ok(())
}

fn parse_opt_time(idx: usize, raw: Option<String>) -> rusqlite::Result<Option<NaiveTime>> {
    match raw {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => NaiveTime::parse_from_str(&s, "%H:%M")
            .map(Some)
            .map_err(|_| conversion_error(idx, AppError::InvalidTime(s.clone()))),
    }
}

pub fn map_daily_row(row: &Row) -> rusqlite::Result<DailyRecord> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(0, AppError::InvalidDate(date_str.clone())))?;

    Ok(DailyRecord {
        date,
        arrival: parse_opt_time(1, row.get("arrival")?)?,
        departure: parse_opt_time(2, row.get("departure")?)?,
        worked_minutes: row.get("worked_minutes")?,
        missing_in: row.get("missing_in")?,
        missing_out: row.get("missing_out")?,
        has_multiple_logs: row.get("multiple_logs")?,
        manually_edited: row.get("manually_edited")?,
    })
}

fn load_daily_records(conn: &Connection, employee_id: &str, month: YearMonth) -> AppResult<Vec<DailyRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT date, arrival, departure, worked_minutes,
                missing_in, missing_out, multiple_logs, manually_edited
         FROM daily_records
         WHERE employee_id = ?1 AND month = ?2
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(params![employee_id, month.to_string()], map_daily_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Stored records for `month`, ordered by employee ID.
pub fn load_month_records(conn: &Connection, month: YearMonth) -> AppResult<Vec<MonthlyRecord>> {
    let mut stmt = conn.prepare(
        "SELECT employee_id, total_minutes FROM monthly_records
         WHERE month = ?1
         ORDER BY employee_id ASC",
    )?;

    let heads = stmt.query_map([month.to_string()], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut out = Vec::new();
    for h in heads {
        let (employee_id, total_minutes) = h?;
        let daily_records = load_daily_records(conn, &employee_id, month)?;
        out.push(MonthlyRecord {
            employee_id,
            month,
            daily_records,
            total_minutes,
        });
    }
    Ok(out)
}

pub fn load_monthly_record(
    conn: &Connection,
    employee_id: &str,
    month: YearMonth,
) -> AppResult<Option<MonthlyRecord>> {
    let total: Option<i64> = conn
        .query_row(
            "SELECT total_minutes FROM monthly_records WHERE employee_id = ?1 AND month = ?2",
            params![employee_id, month.to_string()],
            |row| row.get(0),
        )
        .optional()?;

    let Some(total_minutes) = total else {
        return Ok(None);
    };

    Ok(Some(MonthlyRecord {
        employee_id: employee_id.to_string(),
        month,
        daily_records: load_daily_records(conn, employee_id, month)?,
        total_minutes,
    }))
}

// ---------------------------
// Employee names
// ---------------------------

pub fn set_employee_name(conn: &Connection, employee_id: &str, name: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO employee_names (employee_id, name, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(employee_id) DO UPDATE SET name = excluded.name, updated_at = excluded.updated_at",
        params![employee_id, name, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn load_employee_names(conn: &Connection) -> AppResult<BTreeMap<String, String>> {
    let mut stmt = conn.prepare("SELECT employee_id, name FROM employee_names")?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?;

    let mut out = BTreeMap::new();
    for r in rows {
        let (id, name) = r?;
        out.insert(id, name);
    }
    Ok(out)
}
