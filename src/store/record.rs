//! Record ⇄ employee conversion.
//!
//! A record is `TypeName,name,email,image,<variant fields...>`. The type
//! name picks a builder from [`REGISTRY`]; the builder feeds the remaining
//! positional fields to the matching validated constructor.

use crate::errors::{AppError, AppResult, ValidationError};
use crate::models::{Department, Employee, EmployeeType, Role};
use crate::utils::date::decode_date;
use chrono::NaiveDate;

type Builder = fn(&RecordFields<'_>) -> AppResult<Employee>;

/// Type name → constructor. The only way a stored record becomes an employee.
const REGISTRY: [(EmployeeType, Builder); 6] = [
    (EmployeeType::Salaried, build_salaried),
    (EmployeeType::Hourly, build_hourly),
    (EmployeeType::Executive, build_executive),
    (EmployeeType::Manager, build_manager),
    (EmployeeType::Permanent, build_permanent),
    (EmployeeType::Temporary, build_temporary),
];

pub fn builder_for(type_name: &str) -> Option<(EmployeeType, Builder)> {
    REGISTRY.iter().find(|(t, _)| t.name() == type_name).copied()
}

/// Number of fields a record of the given type carries, type name included.
pub fn field_count(kind: EmployeeType) -> usize {
    match kind {
        EmployeeType::Salaried | EmployeeType::Hourly => 5,
        _ => 6,
    }
}

/// Positional view over one record, 1-based `line` for error messages.
pub struct RecordFields<'a> {
    line: usize,
    fields: &'a [String],
}

impl<'a> RecordFields<'a> {
    pub fn new(line: usize, fields: &'a [String]) -> Self {
        Self { line, fields }
    }

    fn corrupt(&self, reason: impl Into<String>) -> AppError {
        AppError::CorruptRecord {
            line: self.line,
            reason: reason.into(),
        }
    }

    fn get(&self, idx: usize, what: &str) -> AppResult<&'a str> {
        self.fields
            .get(idx)
            .map(String::as_str)
            .ok_or_else(|| self.corrupt(format!("missing {what}")))
    }

    fn name(&self) -> AppResult<&'a str> {
        self.get(1, "name")
    }

    fn email(&self) -> AppResult<&'a str> {
        self.get(2, "email")
    }

    fn pay(&self) -> AppResult<f64> {
        let raw = self.get(4, "pay")?;
        raw.trim()
            .parse::<f64>()
            .map_err(|_| self.corrupt(format!("'{raw}' is not a number")))
    }

    fn role(&self) -> AppResult<Role> {
        let raw = self.get(5, "role")?;
        Role::from_name(raw.trim()).ok_or_else(|| self.corrupt(format!("unknown role '{raw}'")))
    }

    fn department(&self) -> AppResult<Department> {
        let raw = self.get(5, "department")?;
        Department::from_name(raw.trim())
            .ok_or_else(|| self.corrupt(format!("unknown department '{raw}'")))
    }

    fn date(&self, what: &str) -> AppResult<NaiveDate> {
        let raw = self.get(5, what)?;
        decode_date(raw).ok_or_else(|| self.corrupt(format!("'{raw}' is not a valid {what}")))
    }

    /// Turn a constructor rejection into a load error for this line.
    fn check(&self, built: Result<Employee, ValidationError>) -> AppResult<Employee> {
        built.map_err(|e| self.corrupt(e.to_string()))
    }
}

fn build_salaried(r: &RecordFields<'_>) -> AppResult<Employee> {
    r.check(Employee::salaried(r.name()?, r.email()?, r.pay()?))
}

fn build_hourly(r: &RecordFields<'_>) -> AppResult<Employee> {
    r.check(Employee::hourly(r.name()?, r.email()?, r.pay()?))
}

fn build_executive(r: &RecordFields<'_>) -> AppResult<Employee> {
    r.check(Employee::executive(r.name()?, r.email()?, r.pay()?, r.role()?))
}

fn build_manager(r: &RecordFields<'_>) -> AppResult<Employee> {
    r.check(Employee::manager(
        r.name()?,
        r.email()?,
        r.pay()?,
        r.department()?,
    ))
}

fn build_permanent(r: &RecordFields<'_>) -> AppResult<Employee> {
    r.check(Employee::permanent(
        r.name()?,
        r.email()?,
        r.pay()?,
        r.date("hired date")?,
    ))
}

fn build_temporary(r: &RecordFields<'_>) -> AppResult<Employee> {
    r.check(Employee::temporary(
        r.name()?,
        r.email()?,
        r.pay()?,
        r.date("last day")?,
    ))
}

/// Rebuild one employee from the fields of a stored record.
pub fn parse_fields(line: usize, fields: &[String]) -> AppResult<Employee> {
    let type_name = fields.first().map(|s| s.trim()).unwrap_or_default();

    let (kind, build) = builder_for(type_name).ok_or_else(|| AppError::UnknownEmployeeType {
        line,
        name: type_name.to_string(),
    })?;

    let expected = field_count(kind);
    if fields.len() != expected {
        return Err(AppError::CorruptRecord {
            line,
            reason: format!(
                "{} records have {} fields, found {}",
                kind,
                expected,
                fields.len()
            ),
        });
    }

    let record = RecordFields::new(line, fields);
    let mut employee = build(&record)?;

    let image = record.get(3, "image")?;
    employee
        .set_image(image)
        .map_err(|e| record.corrupt(e.to_string()))?;

    Ok(employee)
}

/// Parse one comma-separated line, e.g. the output of `Employee::long_form`.
///
/// Fields are split on bare commas only, so this does not understand quoting.
pub fn parse_line(line_no: usize, line: &str) -> AppResult<Employee> {
    let fields: Vec<String> = line.split(',').map(str::to_string).collect();
    parse_fields(line_no, &fields)
}
