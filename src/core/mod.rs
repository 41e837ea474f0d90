//! Pure attendance logic: no I/O, no shared state.

pub mod calculator;
pub mod generator;
pub mod parser;
pub mod reconcile;

pub use generator::generate_monthly_records;
pub use parser::{LineWarning, ParseOutcome, SkipReason, parse_log};
pub use reconcile::{TimeEdit, apply_edit};
