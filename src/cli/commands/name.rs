use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::set_employee_name;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Handle the `name` command: set an employee's display name.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Name { employee, name } = cmd {
        let employee = employee.trim();
        let name = name.trim();

        if employee.is_empty() {
            return Err(AppError::Other("employee ID must not be empty".into()));
        }
        if name.is_empty() {
            return Err(AppError::Other("name must not be empty".into()));
        }

        let pool = DbPool::new(&cfg.database)?;
        set_employee_name(&pool.conn, employee, name)?;

        ttlog_quiet(&pool.conn, "name", employee, &format!("Display name set to '{name}'"));
        success(format!("Employee {employee} is now shown as '{name}'."));
    }

    Ok(())
}
