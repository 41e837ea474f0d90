use crate::cli::commands::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::generator::generate_monthly_records;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{load_log_entries, month_has_records, replace_month_records};
use crate::errors::{AppError, AppResult};
use crate::export::confirm;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::{format_time, parse_optional_time};

/// Handle the `generate` command.
///
/// Regenerating a month replaces all of its records, manual edits included,
/// so the user is asked first unless `--force` is given.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        month,
        force,
        start,
        end,
    } = cmd
    {
        let month = resolve_month(month)?;

        let mut defaults = cfg.shift_defaults()?;
        if let Some(t) = parse_optional_time(start.as_ref())? {
            defaults.start_time = t;
        }
        if let Some(t) = parse_optional_time(end.as_ref())? {
            defaults.end_time = t;
        }

        let mut pool = DbPool::new(&cfg.database)?;

        let entries = load_log_entries(&pool.conn)?;
        if entries.is_empty() {
            return Err(AppError::Other(
                "no log entries stored: run `rworktime import <FILE>` first".into(),
            ));
        }

        if month_has_records(&pool.conn, month)?
            && !*force
            && !confirm(&format!(
                "Records for {month} already exist. Regenerating discards all manual edits for this month."
            ))?
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let records = generate_monthly_records(&entries, month, &defaults);
        replace_month_records(&mut pool.conn, month, &records)?;

        if records.is_empty() {
            warning(format!("No punches found for {month}."));
        } else {
            success(format!(
                "Generated records for {} employees ({}, default shift {} - {})",
                records.len(),
                month,
                format_time(defaults.start_time),
                format_time(defaults.end_time)
            ));
        }

        ttlog_quiet(
            &pool.conn,
            "generate",
            &month.to_string(),
            &format!("Generated records for {} employees", records.len()),
        );
    }

    Ok(())
}
