use crate::cli::commands::open_db;
use crate::cli::parser::{Commands, TrackCmd};
use crate::config::Config;
use crate::core::machine::{StartRequest, TrackAction};
use crate::core::tracker::{TrackOutcome, TrackerLogic};
use crate::errors::{AppError, AppResult};
use crate::models::overtime_type::OvertimeType;
use crate::models::session::SessionView;
use crate::ui::messages::{header, info, success};
use crate::utils::clock::Moment;
use crate::utils::formatting::{hours2readable, local_stamp, pad_right, secs2clock};
use crate::utils::time::elapsed_seconds;
use chrono::FixedOffset;

pub fn handle(cmd: &Commands, cfg: &Config, now: &Moment) -> AppResult<()> {
    if let Commands::Track { employee, action } = cmd {
        let employee_id = employee
            .clone()
            .or_else(|| cfg.default_employee.clone())
            .ok_or(AppError::MissingEmployeeId)?;

        let mut pool = open_db(cfg)?;
        let offset = cfg.office_offset()?;

        let action = match action {
            TrackCmd::Status => {
                match TrackerLogic::current(&pool.conn, &employee_id)? {
                    Some(view) => print_status(&view, now, offset),
                    None => info(format!("No active overtime session for '{employee_id}'.")),
                }
                return Ok(());
            }
            TrackCmd::Start {
                overtime_type,
                project_id,
                project_name,
                memo,
            } => TrackAction::Start(StartRequest {
                overtime_type: OvertimeType::from_input(overtime_type)
                    .ok_or_else(|| AppError::InvalidOvertimeType(overtime_type.clone()))?,
                project_id: *project_id,
                project_name: project_name.clone(),
                memo: memo.clone(),
            }),
            TrackCmd::Pause => TrackAction::Pause,
            TrackCmd::Resume => TrackAction::Resume,
            TrackCmd::End => TrackAction::End,
        };

        let outcome = TrackerLogic::apply(&mut pool, &employee_id, action, now, cfg.end_cleanup)?;
        print_outcome(&outcome, offset);
    }

    Ok(())
}

fn print_outcome(outcome: &TrackOutcome, offset: FixedOffset) {
    match outcome {
        TrackOutcome::Started { session } => success(format!(
            "Overtime session #{} started at {} ({})",
            session.session.id,
            local_stamp(&session.session.start_time, offset),
            session.session.overtime_type.label()
        )),
        TrackOutcome::Paused { opened, .. } => success(format!(
            "Break #{} started at {}",
            opened.id,
            local_stamp(&opened.break_start_time, offset)
        )),
        TrackOutcome::Resumed { session } => success(format!(
            "Session resumed. Total break time: {}",
            secs2clock(session.session.total_break_seconds)
        )),
        TrackOutcome::Ended { entry, session } => {
            success(format!(
                "Overtime #{} recorded for {} ({} → {})",
                entry.id,
                entry.date_str(),
                entry.start_str(),
                entry.end_str()
            ));
            println!(
                "   Total: {}   Breaks: {}   Worked: {}",
                hours2readable(session.totals.total_hours),
                secs2clock(session.totals.total_break_seconds),
                hours2readable(session.totals.actual_working_hours)
            );
            if let Some(desc) = &entry.description {
                println!("   {desc}");
            }
        }
    }
}

fn print_status(view: &SessionView, now: &Moment, offset: FixedOffset) {
    let s = &view.session;
    header(format!("Overtime session #{}", s.id));

    let state = if s.is_paused { "paused" } else { "running" };
    let elapsed = elapsed_seconds(&s.start_time, &now.utc);
    let open_breaks = view.breaks.iter().filter(|b| b.is_open()).count();

    let mut rows = vec![
        ("Employee", s.employee_id.clone()),
        ("Type", s.overtime_type.label().to_string()),
        ("State", state.to_string()),
        ("Started", local_stamp(&s.start_time, offset)),
        ("Elapsed", secs2clock(elapsed)),
        ("Breaks", secs2clock(s.total_break_seconds)),
    ];
    if let Some(p) = &view.project {
        rows.push(("Project", format!("#{} {}", p.id, p.name)));
    } else if let Some(name) = &s.project_name {
        rows.push(("Project", name.clone()));
    }
    if let Some(memo) = &s.memo {
        rows.push(("Memo", memo.clone()));
    }
    if open_breaks > 0
        && let Some(since) = s.last_pause_time
    {
        rows.push(("On break since", local_stamp(&since, offset)));
    }

    for (label, value) in rows {
        println!("{} {}", pad_right(&format!("{label}:"), 16), value);
    }
}
