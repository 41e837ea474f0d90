use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::parser::parse_log;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::replace_log_entries;
use crate::errors::AppResult;
use crate::ui::messages::{bullet_list, success, warning};
use crate::utils::path::expand_tilde;
use std::fs;

/// Handle the `import` command: parse a badge log and store its punches.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        let bytes = fs::read(&path)?;
        let content = String::from_utf8_lossy(&bytes);

        // A fatal parse error leaves the stored punches untouched
        let outcome = parse_log(&content)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let stored = replace_log_entries(&mut pool.conn, &outcome.entries)?;

        if outcome.skipped_lines > 0 {
            warning(format!(
                "Loaded {} entries, {} lines skipped",
                stored, outcome.skipped_lines
            ));
            bullet_list(&outcome.warnings, cfg.max_warnings_shown, "warnings");
        } else {
            success(format!("Loaded {} log entries", stored));
        }

        ttlog_quiet(
            &pool.conn,
            "import",
            &path.display().to_string(),
            &format!(
                "Imported {} entries ({} lines skipped)",
                stored, outcome.skipped_lines
            ),
        );
    }

    Ok(())
}
