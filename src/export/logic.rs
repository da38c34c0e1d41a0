// src/export/logic.rs

use crate::core::audit;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_not_data_file, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::store::Roster;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the roster rows (ID#, Type, Name, Pay, Email).
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    pub fn export(
        roster: &Roster,
        format: ExportFormat,
        file: &str,
        force: bool,
        currency: &str,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let rows = roster.rows(currency);
        if rows.is_empty() {
            warning("No employees to export.");
            return Ok(());
        }

        ensure_not_data_file(path, roster.path())?;
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        audit(
            roster.path(),
            "export",
            file,
            &format!("{} rows as {}", rows.len(), format.as_str()),
        );

        Ok(())
    }
}
