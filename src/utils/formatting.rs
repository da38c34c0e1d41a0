//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Money with thousands separators and two decimals: `$12,345.67`.
pub fn money(value: f64, currency: &str) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}{currency}{grouped}.{dec_part}")
}

/// Short description of the variant-specific field, used by `show`.
pub fn describe_extra(e: &crate::models::Employee) -> Option<(String, String)> {
    if let Some(role) = e.role() {
        return Some(("Role".into(), role.name().to_string()));
    }
    if let Some(dep) = e.department() {
        return Some(("Department".into(), dep.label()));
    }
    if let Some(d) = e.hired_date() {
        return Some(("Hired date".into(), d.format("%Y-%m-%d").to_string()));
    }
    if let Some(d) = e.last_day() {
        return Some(("Last day".into(), d.format("%Y-%m-%d").to_string()));
    }
    None
}
