use crate::errors::AppResult;
use crate::store::log::read_entries;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Option<Regex>> = OnceLock::new();
    match ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok()) {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// Colour of an operation in the printed log
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "edit" => Colour::Yellow,
        "backup" => Colour::Blue,
        "export" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the operation log, one line per entry, oldest first.
    pub fn render(data_file: &Path) -> AppResult<Vec<String>> {
        let entries = read_entries(data_file)?;

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        let mut lines = Vec::with_capacity(entries.len());
        for e in entries {
            let color = color_for_operation(&e.operation);

            let mut colored = color.paint(e.operation.as_str()).to_string();
            if !e.target.is_empty() {
                colored.push_str(&format!(" ({})", e.target));
            }

            // truncate on the visible text, then colour only the operation again
            let visible = strip_ansi(&colored);
            let shown = if visible.chars().count() > MAX_OP_WIDTH {
                let mut s: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                visible
            };

            let recolored = match shown.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(shown.as_str()).to_string(),
            };

            let padding =
                " ".repeat(MAX_OP_WIDTH.saturating_sub(strip_ansi(&recolored).chars().count()));

            lines.push(format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                recolored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            ));
        }

        Ok(lines)
    }

    pub fn print_log(data_file: &Path) -> AppResult<()> {
        let lines = Self::render(data_file)?;
        if lines.is_empty() {
            info("The operation log is empty.");
            return Ok(());
        }

        println!("📜 Operation log:\n");
        for line in lines {
            println!("{}", line);
        }
        Ok(())
    }
}
