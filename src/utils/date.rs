use chrono::{Datelike, NaiveDate};

/// Replaces the commas inside a serialized date so it survives a
/// comma-delimited record.
pub const DATE_SENTINEL: char = '!';

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// `2024-03-09` → `2024!3!9` (the `year,month,day` triple with every comma
/// swapped for the sentinel).
pub fn encode_date(d: NaiveDate) -> String {
    format!("{},{},{}", d.year(), d.month(), d.day()).replace(',', &DATE_SENTINEL.to_string())
}

/// Reverse of [`encode_date`]. ISO `YYYY-MM-DD` is accepted as well.
pub fn decode_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Some(d) = parse_date(s) {
        return Some(d);
    }

    let restored = s.replace(DATE_SENTINEL, ",");
    let parts: Vec<&str> = restored.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return None;
    }

    let year: i32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let day: u32 = parts[2].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
