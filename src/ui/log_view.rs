use crate::db::log::load_log;
use crate::errors::AppResult;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;
use rusqlite::Connection;

const MAX_OP_WIDTH: usize = 60;

/// ANSI colour per operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "import" => Colour::Cyan,
        "generate" => Colour::Green,
        "edit" => Colour::Yellow,
        "name" => Colour::Blue,
        "export" => Colour::Purple,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Cut to `max` visible characters, appending "..." when shortened.
fn truncate_visible(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
        out.push_str("...");
        out
    } else {
        s.to_string()
    }
}

pub fn print_log(conn: &Connection) -> AppResult<()> {
    let entries = load_log(conn)?;

    if entries.is_empty() {
        println!("📜 Internal log is empty.");
        return Ok(());
    }

    let op_w = entries
        .iter()
        .map(|e| {
            if e.target.is_empty() {
                e.operation.chars().count()
            } else {
                e.operation.chars().count() + e.target.chars().count() + 3
            }
        })
        .max()
        .unwrap_or(10)
        .min(MAX_OP_WIDTH);

    let id_w = entries
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(1);

    let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

    println!("📜 Internal log:\n");

    for e in &entries {
        let date = chrono::DateTime::parse_from_rfc3339(&e.date)
            .map(|dt| dt.format("%FT%T%:z").to_string())
            .unwrap_or_else(|_| e.date.clone());

        let op_target = if e.target.is_empty() {
            e.operation.clone()
        } else {
            format!("{} ({})", e.operation, e.target)
        };

        // only the operation word is coloured
        let visible = truncate_visible(&op_target, MAX_OP_WIDTH);
        let color = color_for_operation(&e.operation);
        let recolored = match visible.split_once(' ') {
            Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
            None => color.paint(visible.as_str()).to_string(),
        };

        let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&recolored).chars().count()));

        println!(
            "{:>id_w$}: {:<date_w$} | {}{} => {}",
            e.id,
            date,
            recolored,
            padding,
            e.message,
            id_w = id_w,
            date_w = date_w
        );
    }

    Ok(())
}
