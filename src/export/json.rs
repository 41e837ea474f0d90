use crate::errors::AppResult;
use crate::export::model::RecordExport;
use crate::models::record::MonthlyRecord;

/// Render records as pretty-printed JSON.
pub fn render_json(records: &[MonthlyRecord]) -> AppResult<String> {
    let rows: Vec<RecordExport> = records.iter().map(RecordExport::from).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
