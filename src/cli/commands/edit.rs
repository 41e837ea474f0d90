use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconcile::TimeEdit;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{load_monthly_record, save_monthly_record};
use crate::errors::{AppError, AppResult};
use crate::models::month::YearMonth;
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::format_hours;
use crate::utils::time::parse_optional_time;

/// Handle the `edit` command: manual correction of one day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        employee,
        date: date_str,
        arrival,
        departure,
        clear_in,
        clear_out,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
        let month = YearMonth::of(d);

        let mut edits = Vec::new();
        if let Some(t) = parse_optional_time(arrival.as_ref())? {
            edits.push(TimeEdit::Arrival(Some(t)));
        } else if *clear_in {
            edits.push(TimeEdit::Arrival(None));
        }
        if let Some(t) = parse_optional_time(departure.as_ref())? {
            edits.push(TimeEdit::Departure(Some(t)));
        } else if *clear_out {
            edits.push(TimeEdit::Departure(None));
        }

        if edits.is_empty() {
            info("Nothing to change: use --in, --out, --clear-in or --clear-out.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;

        let mut record = load_monthly_record(&pool.conn, employee, month)?.ok_or_else(|| {
            AppError::RecordNotFound {
                employee: employee.clone(),
                month: month.to_string(),
            }
        })?;

        for edit in edits {
            record.apply_edit(d, edit)?;
        }

        save_monthly_record(&mut pool.conn, &record)?;

        let day = record
            .day(d)
            .ok_or_else(|| AppError::Other(format!("day {d} missing after edit")))?;

        success(format!(
            "{} {}: {} - {} → {} (month total {})",
            employee,
            d,
            or_dash(&day.arrival_str()),
            or_dash(&day.departure_str()),
            format_hours(day.worked_minutes),
            format_hours(record.total_minutes)
        ));

        ttlog_quiet(
            &pool.conn,
            "edit",
            &format!("{employee} {d}"),
            &format!(
                "arrival={} departure={} worked={}",
                or_dash(&day.arrival_str()),
                or_dash(&day.departure_str()),
                day.worked_minutes
            ),
        );
    }

    Ok(())
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "--:--" } else { s }
}
