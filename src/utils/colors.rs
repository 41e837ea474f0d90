/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const YELLOW: &str = "\x1b[33m";

/// Returns GREY for an empty cell, YELLOW for an inferred time, RESET otherwise.
pub fn color_for_time_cell(value: &str, inferred: bool) -> &'static str {
    if value.trim().is_empty() || value.trim() == "—" {
        GREY
    } else if inferred {
        YELLOW
    } else {
        RESET
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    if color == RESET {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}
