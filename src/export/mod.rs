mod csv;
mod fs_utils;
mod json;

use crate::errors::AppResult;
use crate::models::overtime_entry::OvertimeEntry;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write ledger entries to `file` in the requested format.
pub fn export_entries(
    entries: &[OvertimeEntry],
    format: ExportFormat,
    file: &str,
    force: bool,
) -> AppResult<()> {
    let path = expand_tilde(file);
    fs_utils::ensure_writable(&path, force)?;

    match format {
        ExportFormat::Csv => csv::write_csv(&path, entries)?,
        ExportFormat::Json => json::write_json(&path, entries)?,
    }

    success(format!(
        "{} export completed: {} ({} entries)",
        format.as_str().to_uppercase(),
        path.display(),
        entries.len()
    ));
    Ok(())
}
