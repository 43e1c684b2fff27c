use crate::db::queries::load_log;
use crate::errors::AppResult;
use ansi_term::Colour;
use rusqlite::Connection;

/// ANSI colour for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" | "clear" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let entries = load_log(conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| op.len() + target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(40);

        println!("📜 Internal log:\n");

        for (id, raw_date, operation, target, message) in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            // Operation and target share one column; only the operation is coloured
            let visible_len = if target.is_empty() {
                operation.len()
            } else {
                operation.len() + target.len() + 3
            };
            let op_target = if target.is_empty() {
                color_for_operation(&operation).paint(operation.as_str()).to_string()
            } else {
                format!(
                    "{} ({})",
                    color_for_operation(&operation).paint(operation.as_str()),
                    target
                )
            };
            let padding = " ".repeat(op_w.saturating_sub(visible_len));

            println!(
                "{:>id_w$}: {} | {}{} => {}",
                id,
                date,
                op_target,
                padding,
                message,
                id_w = id_w
            );
        }

        Ok(())
    }
}
