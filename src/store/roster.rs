//! The in-memory employee roster and its data file.
//!
//! The file is read in full on [`Roster::load`] and rewritten in full on
//! [`Roster::save`]; there are no incremental updates.

use super::record::parse_fields;
use crate::errors::{AppError, AppResult};
use crate::models::Employee;
use crate::utils::formatting::money;
use crate::utils::path::with_suffix;
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One display row: what the list table and the exports show.
#[derive(Serialize, Clone, Debug)]
pub struct RosterRow {
    pub id: u32,
    pub kind: String,
    pub name: String,
    pub pay: String,
    pub email: String,
}

impl RosterRow {
    pub fn from_employee(e: &Employee, currency: &str) -> Self {
        Self {
            id: e.id(),
            kind: e.employee_type().name().to_string(),
            name: e.name().to_string(),
            pay: money(e.compensation().rate(), currency),
            email: e.email().to_string(),
        }
    }
}

/// `employee.data.csv` → `employee.data.csv.tmp`, written during a save.
pub fn tmp_file_for(data_file: &Path) -> PathBuf {
    with_suffix(data_file, ".tmp")
}

pub struct Roster {
    path: PathBuf,
    employees: Vec<Employee>,
}

impl Roster {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            employees: Vec::new(),
        }
    }

    /// Read every record of `path`. A missing file is an empty roster; a bad
    /// record aborts the whole load.
    pub fn load(path: impl Into<PathBuf>) -> AppResult<Self> {
        let mut roster = Self::new(path);
        if !roster.path.exists() {
            return Ok(roster);
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&roster.path)?;

        for (idx, result) in rdr.records().enumerate() {
            let record = result?;
            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(idx + 1);
            let fields: Vec<String> = record.iter().map(str::to_string).collect();
            roster.employees.push(parse_fields(line, &fields)?);
        }

        Ok(roster)
    }

    /// Rewrite the data file with the current roster.
    ///
    /// Records go to a sibling temp file first, which is then renamed over
    /// the data file, so an interrupted save leaves the old file in place.
    pub fn save(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = tmp_file_for(&self.path);
        {
            let mut wtr = WriterBuilder::new()
                .has_headers(false)
                .flexible(true)
                .quote_style(QuoteStyle::Necessary)
                .from_path(&tmp)?;

            for e in &self.employees {
                wtr.write_record(e.to_fields())?;
            }
            wtr.flush()?;
        }

        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn push(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    pub fn get(&self, id: u32) -> AppResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id() == id)
            .ok_or(AppError::EmployeeNotFound(id))
    }

    pub fn get_mut(&mut self, id: u32) -> AppResult<&mut Employee> {
        self.employees
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(AppError::EmployeeNotFound(id))
    }

    pub fn rows(&self, currency: &str) -> Vec<RosterRow> {
        self.employees
            .iter()
            .map(|e| RosterRow::from_employee(e, currency))
            .collect()
    }

    /// Sum of everyone's weekly pay.
    pub fn weekly_total(&self) -> f64 {
        self.employees.iter().map(Employee::calc_pay).sum()
    }
}
