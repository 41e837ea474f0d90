use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::process::Command;

/// `config`: update the default shift, print or edit the file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
        start,
        end,
    } = cmd
    {
        if start.is_some() || end.is_some() {
            // from disk, so a one-off --db is not persisted
            let mut updated = Config::load()?;
            updated.set_shift_defaults(start.as_deref(), end.as_deref())?;
            updated.save()?;
            success(format!(
                "Default shift set to {} - {}",
                updated.default_start_time, updated.default_end_time
            ));
        }

        if *print_config {
            println!("📄 {}\n", Config::config_file().display());
            print!("{}", serde_yaml::to_string(cfg)?);
        }

        if *edit_config {
            edit_file(&Config::config_file().to_string_lossy(), editor)?;
        }
    }

    Ok(())
}

/// Open `path` in the chosen editor, then in the platform default if that fails.
fn edit_file(path: &str, editor: &Option<String>) -> AppResult<()> {
    let fallback = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| platform_editor().to_string());

    let mut candidates = Vec::new();
    if let Some(e) = editor {
        candidates.push(e.clone());
    }
    if !candidates.contains(&fallback) {
        candidates.push(fallback);
    }

    for candidate in &candidates {
        match Command::new(candidate).arg(path).status() {
            Ok(status) if status.success() => {
                success(format!("Configuration edited with '{candidate}'"));
                return Ok(());
            }
            _ => warning(format!("Editor '{candidate}' failed or is not installed")),
        }
    }

    Err(AppError::Config(format!("could not open {path} in any editor")))
}

fn platform_editor() -> &'static str {
    if cfg!(target_os = "windows") {
        "notepad"
    } else {
        "nano"
    }
}
