use crate::core::audit;
use crate::errors::{AppError, AppResult, ValidationError};
use crate::models::{Department, Employee, EmployeeType, FieldValue, Role};
use crate::store::Roster;
use crate::ui::messages::success;
use chrono::NaiveDate;

/// Raw user input for a new employee, as typed on the command line.
#[derive(Debug, Default, Clone)]
pub struct NewEmployee {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    pub pay: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub hired: Option<String>,
    pub last_day: Option<String>,
}

pub struct AddLogic;

impl AddLogic {
    /// Build the employee described by `input`, append it and save the roster.
    /// Returns the new employee's id.
    pub fn apply(
        roster: &mut Roster,
        kind: EmployeeType,
        input: &NewEmployee,
        check_image: bool,
    ) -> AppResult<u32> {
        let mut employee = Self::build(kind, input)?;

        if let Some(image) = &input.image {
            if check_image {
                employee.set_image_checked(image)?;
            } else {
                employee.set_image(image)?;
            }
        }

        let id = employee.id();
        let summary = employee.to_string();
        let long = employee.long_form();

        roster.push(employee);
        roster.save()?;

        audit(roster.path(), "add", &summary, &long);
        success(format!("Added {} {}", kind, summary));

        Ok(id)
    }

    /// Convert raw input and run the validated constructor for `kind`.
    pub fn build(kind: EmployeeType, input: &NewEmployee) -> AppResult<Employee> {
        let name = input.name.as_deref().ok_or(AppError::MissingField("--name"))?;
        let email = input
            .email
            .as_deref()
            .ok_or(AppError::MissingField("--email"))?;
        let pay = pay_value(kind, input.pay.as_deref())?;

        let employee = match kind {
            EmployeeType::Salaried => Employee::salaried(name, email, pay)?,
            EmployeeType::Hourly => Employee::hourly(name, email, pay)?,
            EmployeeType::Executive => {
                let raw = input
                    .role
                    .as_deref()
                    .ok_or(AppError::MissingField("--role"))?;
                let role = raw.parse::<Role>().map_err(ValidationError::from)?;
                Employee::executive(name, email, pay, role)?
            }
            EmployeeType::Manager => {
                let raw = input
                    .department
                    .as_deref()
                    .ok_or(AppError::MissingField("--department"))?;
                let department = raw.parse::<Department>().map_err(ValidationError::from)?;
                Employee::manager(name, email, pay, department)?
            }
            EmployeeType::Permanent => {
                let raw = input
                    .hired
                    .as_deref()
                    .ok_or(AppError::MissingField("--hired"))?;
                let hired = date_value(raw, ValidationError::InvalidHiredDate)?;
                Employee::permanent(name, email, pay, hired)?
            }
            EmployeeType::Temporary => {
                let raw = input
                    .last_day
                    .as_deref()
                    .ok_or(AppError::MissingField("--last-day"))?;
                let last_day = date_value(raw, ValidationError::InvalidLastDay)?;
                Employee::temporary(name, email, pay, last_day)?
            }
        };

        Ok(employee)
    }
}

/// Pay text must read as a float, like a text box converted with a float
/// parse; anything else is the variant's pay error.
fn pay_value(kind: EmployeeType, raw: Option<&str>) -> AppResult<f64> {
    let raw = raw.ok_or(AppError::MissingField("--pay"))?;
    match FieldValue::from_pay_input(raw) {
        FieldValue::Float(v) => Ok(v),
        _ if kind.is_salaried() => Err(ValidationError::InvalidYearly.into()),
        _ => Err(ValidationError::InvalidHourly.into()),
    }
}

fn date_value(raw: &str, err: ValidationError) -> AppResult<NaiveDate> {
    match FieldValue::from_date_input(raw) {
        FieldValue::Date(d) => Ok(d),
        _ => Err(err.into()),
    }
}
