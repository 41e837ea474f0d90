use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// `init`: config directory, config file (skipped with `--test`),
/// database file and schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    if cli.test {
        info("Test mode: configuration file left untouched");
    } else {
        success(format!("Config file: {}", Config::config_file().display()));
    }

    let pool = DbPool::new(&cfg.database)?;
    success(format!("Database initialized at {}", cfg.database));

    log::ttlog_quiet(
        &pool.conn,
        "init",
        &cfg.database,
        &format!("Database initialized (shift {} - {})", cfg.default_start_time, cfg.default_end_time),
    );

    Ok(())
}
