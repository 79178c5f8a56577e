use crate::cli::commands::open_db;
use crate::cli::parser::{Commands, OfficeHoursCmd};
use crate::config::Config;
use crate::core::admission::OfficeCalendar;
use crate::core::office_hours::OfficeHoursLogic;
use crate::errors::AppResult;
use crate::models::office_hours::day_name;
use crate::ui::messages::{header, success, warning};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::OfficeHours { action } = cmd {
        let pool = open_db(cfg)?;

        match action {
            OfficeHoursCmd::List => {
                let calendar = OfficeCalendar::load(&pool.conn)?;
                header(format!("Office hours (UTC{})", cfg.utc_offset));

                let mut table = Table::new(vec![
                    Column::new("Day", 10),
                    Column::new("Status", 14),
                    Column::new("Start", 5),
                    Column::new("End", 5),
                ]);
                for dow in 0..7 {
                    let row = match calendar.day(dow) {
                        Some(d) if d.is_working_day => vec![
                            d.day_name().to_string(),
                            "working".to_string(),
                            format_hm(d.start_time),
                            format_hm(d.end_time),
                        ],
                        Some(d) => vec![d.day_name().to_string(), "off".to_string()],
                        None => vec![day_name(dow).to_string(), "not configured".to_string()],
                    };
                    table.add_row(row);
                }
                print!("{}", table.render());
            }

            OfficeHoursCmd::Set { day, start, end } => {
                let dow = OfficeHoursLogic::set(&pool, day, start, end)?;
                success(format!("{}: office hours {start}-{end}", day_name(dow)));
            }

            OfficeHoursCmd::Off { day } => {
                let dow = OfficeHoursLogic::off(&pool, day)?;
                success(format!("{} marked as day off", day_name(dow)));
            }

            OfficeHoursCmd::Clear { day } => {
                let (dow, removed) = OfficeHoursLogic::clear(&pool, day)?;
                if removed {
                    success(format!(
                        "{} configuration removed: overtime is allowed all day",
                        day_name(dow)
                    ));
                } else {
                    warning(format!("{} had no configuration", day_name(dow)));
                }
            }
        }
    }

    Ok(())
}
