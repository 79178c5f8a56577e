use crate::cli::commands::open_db;
use crate::cli::parser::{Commands, OvertimeCmd};
use crate::config::Config;
use crate::core::ledger::LedgerLogic;
use crate::errors::AppResult;
use crate::export::export_entries;
use crate::models::overtime_entry::OvertimeEntry;
use crate::models::overtime_status::OvertimeStatus;
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::{bold, hours2readable};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Overtime { action } = cmd {
        let pool = open_db(cfg)?;

        match action {
            OvertimeCmd::List { employee, period } => {
                let entries = LedgerLogic::list(&pool, employee.as_deref(), period.as_deref())?;
                if entries.is_empty() {
                    info("No overtime entries found.");
                    return Ok(());
                }
                print_entries(&entries);
            }

            OvertimeCmd::Approve { id } => {
                let e = LedgerLogic::review(&pool, *id, OvertimeStatus::Approved)?;
                success(format!("Overtime #{} approved ({})", e.id, e.employee_id));
            }

            OvertimeCmd::Reject { id } => {
                let e = LedgerLogic::review(&pool, *id, OvertimeStatus::Rejected)?;
                success(format!("Overtime #{} rejected ({})", e.id, e.employee_id));
            }

            OvertimeCmd::Export {
                format,
                file,
                employee,
                period,
                force,
            } => {
                let entries = LedgerLogic::list(&pool, employee.as_deref(), period.as_deref())?;
                if entries.is_empty() {
                    warning("No overtime entries to export.");
                    return Ok(());
                }
                export_entries(&entries, *format, file, *force)?;
            }
        }
    }

    Ok(())
}

fn print_entries(entries: &[OvertimeEntry]) {
    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("Employee", 10),
        Column::new("Date", 10),
        Column::new("Type", 13),
        Column::new("Start", 8),
        Column::new("End", 8),
        Column::new("Total", 7),
        Column::new("Worked", 7),
        Column::new("Status", 8),
        Column::new("Description", 20),
    ]);

    for e in entries {
        table.add_row(vec![
            e.id.to_string(),
            e.employee_id.clone(),
            e.date_str(),
            e.overtime_type.to_db_str().to_string(),
            e.start_str(),
            e.end_str(),
            format!("{:.2}", e.total_hours),
            format!("{:.2}", e.actual_working_hours),
            e.status.to_db_str().to_string(),
            e.description.clone().unwrap_or_default(),
        ]);
    }
    print!("{}", table.render());

    let (total, worked) = LedgerLogic::total_hours(entries);
    println!(
        "\n{} {} total, {} worked ({} entries)",
        bold("Σ"),
        hours2readable(total),
        hours2readable(worked),
        entries.len()
    );
}
