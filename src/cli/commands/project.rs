use crate::cli::commands::open_db;
use crate::cli::parser::{Commands, ProjectCmd};
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::projects::{insert_project, load_projects};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Project { action } = cmd {
        let pool = open_db(cfg)?;

        match action {
            ProjectCmd::Add { name, code } => {
                let p = insert_project(&pool.conn, name.trim(), code.as_deref())?;
                ttlog_quiet(&pool.conn, "project_add", &p.id.to_string(), &p.name);
                success(format!("Project #{} '{}' added", p.id, p.name));
            }

            ProjectCmd::List => {
                let projects = load_projects(&pool.conn)?;
                if projects.is_empty() {
                    info("No projects registered.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::new("ID", 4),
                    Column::new("Name", 24),
                    Column::new("Code", 10),
                    Column::new("Status", 8),
                ]);
                for p in projects {
                    table.add_row(vec![
                        p.id.to_string(),
                        p.name,
                        p.code.unwrap_or_default(),
                        p.status,
                    ]);
                }
                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
