use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::hint;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const MAX_OP_WIDTH: usize = 40;

fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));
    re.replace_all(s, "").into_owned()
}

/// ANSI color used for each logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "import" => Colour::Green,
        "remove" | "discard" => Colour::Red,
        "save" => Colour::Blue,
        "load" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Print the internal log, optionally restricted to one operation.
    pub fn print_log(pool: &mut DbPool, operation: Option<&str>) -> AppResult<()> {
        let entries: Vec<_> = load_log(&pool.conn)?
            .into_iter()
            .filter(|e| operation.is_none_or(|op| e.operation == op))
            .collect();

        if entries.is_empty() {
            match operation {
                Some(op) => hint(format!("No '{}' entries in the internal log.", op)),
                None => hint("Internal log is empty."),
            }
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(e.date.clone());

            let mut op_target = color_for_operation(&e.operation)
                .paint(e.operation.as_str())
                .to_string();
            if !e.target.is_empty() {
                let room = MAX_OP_WIDTH.saturating_sub(e.operation.len() + 3);
                let target: String = if e.target.chars().count() > room {
                    let mut t: String = e.target.chars().take(room.saturating_sub(3)).collect();
                    t.push_str("...");
                    t
                } else {
                    e.target.clone()
                };
                op_target.push_str(&format!(" ({})", target));
            }

            // padding computed on the visible text
            let visible = strip_ansi(&op_target).chars().count();
            let padding = " ".repeat(MAX_OP_WIDTH.saturating_sub(visible));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                date,
                op_target,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
