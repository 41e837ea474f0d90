use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

/// A named schema step, recorded in `log` once applied.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_log_entries",
        description: "Created log_entries table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS log_entries (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  TEXT NOT NULL,
            timestamp    TEXT NOT NULL,
            direction    TEXT NOT NULL CHECK(direction IN ('in','out'))
        );

        CREATE INDEX IF NOT EXISTS idx_log_entries_emp_ts ON log_entries(employee_id, timestamp);
        "#,
    },
    Migration {
        version: "20250301_0002_create_records",
        description: "Created monthly_records and daily_records tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS monthly_records (
            employee_id    TEXT NOT NULL,
            month          TEXT NOT NULL,
            total_minutes  INTEGER NOT NULL DEFAULT 0,
            generated_at   TEXT NOT NULL,
            PRIMARY KEY (employee_id, month)
        );

        CREATE TABLE IF NOT EXISTS daily_records (
            employee_id      TEXT NOT NULL,
            month            TEXT NOT NULL,
            date             TEXT NOT NULL,
            arrival          TEXT,
            departure        TEXT,
            worked_minutes   INTEGER NOT NULL DEFAULT 0,
            missing_in       INTEGER NOT NULL DEFAULT 0,
            missing_out      INTEGER NOT NULL DEFAULT 0,
            multiple_logs    INTEGER NOT NULL DEFAULT 0,
            manually_edited  INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (employee_id, date),
            FOREIGN KEY (employee_id, month)
                REFERENCES monthly_records(employee_id, month) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_daily_records_month ON daily_records(month);
        "#,
    },
    Migration {
        version: "20250301_0003_create_employee_names",
        description: "Created employee_names table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS employee_names (
            employee_id  TEXT PRIMARY KEY,
            name         TEXT NOT NULL,
            updated_at   TEXT NOT NULL
        );
        "#,
    },
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    conn.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![Local::now().to_rfc3339(), m.version, m.description],
    )?;

    success(format!("Migration applied: {} → {}", m.version, m.description));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
        }
    }

    Ok(())
}
