pub mod config;
pub mod edit;
pub mod export;
pub mod generate;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod name;

use crate::errors::AppResult;
use crate::models::month::YearMonth;

/// `--month` value, or the current month when omitted.
pub(crate) fn resolve_month(month: &Option<String>) -> AppResult<YearMonth> {
    match month {
        Some(m) => m.parse(),
        None => Ok(YearMonth::current()),
    }
}
