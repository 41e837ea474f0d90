use crate::cli::commands::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::load_month_records;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        month,
        format,
        file,
        force,
    } = cmd
    {
        let month = resolve_month(month)?;
        let path = expand_tilde(file);
        let format = format.clone().unwrap_or_else(|| ExportFormat::from_path(&path));

        let pool = DbPool::new(&cfg.database)?;
        let records = load_month_records(&pool.conn, month)?;

        if records.is_empty() {
            warning(format!("No records to export for {month}."));
            return Ok(());
        }

        ExportLogic::export(&records, &format, &path, *force)?;

        ttlog_quiet(
            &pool.conn,
            "export",
            &path.display().to_string(),
            &format!(
                "Exported {} employees for {} as {}",
                records.len(),
                month,
                format.as_str()
            ),
        );
    }
    Ok(())
}
