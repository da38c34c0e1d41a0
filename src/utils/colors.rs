/// ANSI color helper utilities for terminal output.
use crate::models::EmployeeType;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Salaried variants in blue tones, hourly variants in green tones.
pub fn color_for_type(kind: EmployeeType) -> &'static str {
    match kind {
        EmployeeType::Salaried => BLUE,
        EmployeeType::Executive => MAGENTA,
        EmployeeType::Manager => CYAN,
        EmployeeType::Hourly => GREEN,
        EmployeeType::Permanent => GREEN,
        EmployeeType::Temporary => YELLOW,
    }
}

pub fn colorize_type(kind: EmployeeType) -> String {
    format!("{}{}{}", color_for_type(kind), kind.name(), RESET)
}

/// Grey out a placeholder value.
pub fn colorize_placeholder(value: &str, is_placeholder: bool) -> String {
    if is_placeholder {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
