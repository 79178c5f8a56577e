use crate::cli::commands::open_db;
use crate::cli::parser::{Commands, EmployeeCmd};
use crate::config::Config;
use crate::db::employees::{insert_employee, load_employees};
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { action } = cmd {
        let pool = open_db(cfg)?;

        match action {
            EmployeeCmd::Add { id, full_name } => {
                let emp = insert_employee(&pool.conn, id.trim(), full_name.trim())?;
                ttlog_quiet(&pool.conn, "employee_add", &emp.id, &emp.full_name);
                success(format!("Employee '{}' added ({})", emp.id, emp.full_name));
            }

            EmployeeCmd::List => {
                let employees = load_employees(&pool.conn)?;
                if employees.is_empty() {
                    info("No employees registered.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::new("ID", 12),
                    Column::new("Name", 24),
                    Column::new("Created", 25),
                ]);
                for e in employees {
                    table.add_row(vec![e.id, e.full_name, e.created_at]);
                }
                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
