use crate::cli::commands::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_employee_names, load_month_records};
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::ui::report::render_record;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month, employee } = cmd {
        let month = resolve_month(month)?;

        let pool = DbPool::new(&cfg.database)?;
        let names = load_employee_names(&pool.conn)?;

        let records: Vec<_> = load_month_records(&pool.conn, month)?
            .into_iter()
            .filter(|r| employee.as_ref().is_none_or(|e| &r.employee_id == e))
            .collect();

        if records.is_empty() {
            match employee {
                Some(e) => warning(format!("No records for employee {e} in {month}.")),
                None => warning(format!(
                    "No records for {month}. Run `rworktime generate --month {month}` first."
                )),
            }
            return Ok(());
        }

        for record in &records {
            let name = names.get(&record.employee_id).map(String::as_str);
            println!("{}", render_record(record, name));
        }

        println!("Generated: {}", Local::now().format("%Y-%m-%d %H:%M"));
    }

    Ok(())
}
