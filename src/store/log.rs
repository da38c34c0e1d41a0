//! Internal operation log, kept as a CSV file beside the data file.

use crate::errors::AppResult;
use crate::utils::path::with_suffix;
use chrono::Local;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: usize,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// `employee.data.csv` → `employee.data.csv.log`
pub fn log_file_for(data_file: &Path) -> PathBuf {
    with_suffix(data_file, ".log")
}

/// Append one line to the operation log of `data_file`.
pub fn hrlog(data_file: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // Timestamp locale, ISO 8601
    let now = Local::now().to_rfc3339();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_for(data_file))?;

    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
    wtr.write_record([now.as_str(), operation, target, message])?;
    wtr.flush()?;

    Ok(())
}

/// Read back every log line, oldest first. No log file means no entries.
pub fn read_entries(data_file: &Path) -> AppResult<Vec<LogEntry>> {
    let path = log_file_for(data_file);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(&path)?;

    let mut entries = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        let field = |i: usize| record.get(i).unwrap_or_default().to_string();
        entries.push(LogEntry {
            id: idx + 1,
            date: field(0),
            operation: field(1),
            target: field(2),
            message: field(3),
        });
    }

    Ok(entries)
}
