// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, notify_export_success, render_csv, render_json};
use crate::models::record::MonthlyRecord;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// High-level export: render and write to disk.
pub struct ExportLogic;

impl ExportLogic {
    /// Render `records` in `format` and write them to `path`.
    ///
    /// `path` must be absolute; an existing file is only replaced with
    /// `force` or after confirmation.
    pub fn export(records: &[MonthlyRecord], format: &ExportFormat, path: &Path, force: bool) -> AppResult<()> {
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {}",
                path.display()
            )));
        }

        ensure_writable(path, force)?;

        info(format!(
            "Exporting to {}: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));

        let content = match format {
            ExportFormat::Csv => render_csv(records)?,
            ExportFormat::Json => render_json(records)?,
        };

        fs::write(path, content)?;

        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(())
    }
}
