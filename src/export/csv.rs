use crate::errors::{AppError, AppResult};
use crate::models::overtime_entry::OvertimeEntry;
use csv::Writer;
use std::path::Path;

/// One row per ledger entry, in ledger column order.
pub fn write_csv(path: &Path, entries: &[OvertimeEntry]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record([
        "id",
        "employee_id",
        "project_id",
        "date",
        "overtime_type",
        "start_time",
        "end_time",
        "total_hours",
        "actual_working_hours",
        "description",
        "status",
    ])
    .map_err(|e| AppError::Export(e.to_string()))?;

    for e in entries {
        wtr.write_record(&[
            e.id.to_string(),
            e.employee_id.clone(),
            e.project_id.map(|p| p.to_string()).unwrap_or_default(),
            e.date_str(),
            e.overtime_type.to_db_str().to_string(),
            e.start_str(),
            e.end_str(),
            format!("{:.2}", e.total_hours),
            format!("{:.2}", e.actual_working_hours),
            e.description.clone().unwrap_or_default(),
            e.status.to_db_str().to_string(),
        ])
        .map_err(|err| AppError::Export(err.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
