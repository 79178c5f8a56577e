use crate::cli::commands::open_db;
use crate::cli::parser::{AccountCmd, Commands};
use crate::config::Config;
use crate::db::employees::{employee_exists, insert_account};
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Account { action } = cmd {
        let pool = open_db(cfg)?;

        match action {
            AccountCmd::Add {
                token,
                email,
                employee,
            } => {
                if let Some(emp) = employee
                    && !employee_exists(&pool.conn, emp)?
                {
                    return Err(AppError::UnknownEmployee(emp.clone()));
                }

                let account = insert_account(&pool.conn, token, email, employee.as_deref())?;
                ttlog_quiet(
                    &pool.conn,
                    "account_add",
                    &account.email,
                    &format!(
                        "Account linked to {}",
                        account.employee_id.as_deref().unwrap_or("no employee")
                    ),
                );

                success(format!("Account '{}' registered", account.email));
                if account.employee_id.is_none() {
                    warning("No employee linked: requests with this token will be rejected.");
                }
            }
        }
    }

    Ok(())
}
