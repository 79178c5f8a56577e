use crate::errors::{AppError, AppResult};
use crate::models::overtime_entry::OvertimeEntry;
use std::path::Path;

/// Pretty-printed JSON array of ledger entries.
pub fn write_json(path: &Path, entries: &[OvertimeEntry]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(entries).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
