use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 40;

/// Colour by operation family
fn color_for_operation(op: &str) -> Colour {
    match op {
        "track_start" => Colour::Green,
        "track_end" => Colour::Cyan,
        "track_pause" | "track_resume" => Colour::Yellow,
        "track_cleanup_failed" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        other if other.starts_with("office_hours") => Colour::Blue,
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| e.operation.len() + e.target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for e in entries {
            let color = color_for_operation(&e.operation);

            let plain = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };
            let visible = truncate(&plain, MAX_OP_WIDTH);

            // only the operation word is coloured; padding is computed on the plain text
            let (op_word, rest) = visible
                .split_once(' ')
                .map(|(a, b)| (a.to_string(), format!(" {b}")))
                .unwrap_or_else(|| (visible.clone(), String::new()));
            let padding = " ".repeat(op_w.saturating_sub(visible.chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{}{} => {}",
                e.id,
                e.date,
                color.paint(op_word),
                rest,
                padding,
                e.message,
            );
        }

        Ok(())
    }
}
