//! Employee records.
//!
//! The salaried/hourly hierarchy is a two-level sum type: [`Compensation`]
//! selects the pay basis and carries the sub-variant ([`SalariedGrade`] or
//! [`HourlyTenure`]). Construction and every setter validate first and only
//! then write, so a rejected value never leaves a half-updated record.

use super::department::Department;
use super::employee_type::EmployeeType;
use super::field::{Field, FieldValue};
use super::role::Role;
use super::validate::{self, IMAGE_PLACEHOLDER};
use crate::errors::{InvalidDepartmentError, InvalidRoleError, ValidationError};
use crate::utils::date::encode_date;
use chrono::NaiveDate;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// Process-wide id counter. Starts at 1, never reset.
static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// Take the next id from `counter`. When the counter reaches `u32::MAX` it
/// stays put and every later call fails, so no id is issued twice.
pub fn allocate_id(counter: &AtomicU32) -> Result<u32, ValidationError> {
    counter
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
        .map_err(|_| ValidationError::IdsExhausted)
}

pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const HOURS_PER_WEEK: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SalariedGrade {
    Plain,
    Executive(Role),
    Manager(Department),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HourlyTenure {
    Plain,
    Permanent { hired_date: NaiveDate },
    Temporary { last_day: NaiveDate },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Compensation {
    Salaried { yearly: f64, grade: SalariedGrade },
    Hourly { hourly: f64, tenure: HourlyTenure },
}

impl Compensation {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Compensation::Salaried { yearly, .. } => validate::yearly(*yearly),
            Compensation::Hourly { hourly, .. } => validate::hourly(*hourly),
        }
    }

    pub fn employee_type(&self) -> EmployeeType {
        match self {
            Compensation::Salaried { grade, .. } => match grade {
                SalariedGrade::Plain => EmployeeType::Salaried,
                SalariedGrade::Executive(_) => EmployeeType::Executive,
                SalariedGrade::Manager(_) => EmployeeType::Manager,
            },
            Compensation::Hourly { tenure, .. } => match tenure {
                HourlyTenure::Plain => EmployeeType::Hourly,
                HourlyTenure::Permanent { .. } => EmployeeType::Permanent,
                HourlyTenure::Temporary { .. } => EmployeeType::Temporary,
            },
        }
    }

    /// Weekly pay: yearly / 52 or hourly × 40.
    pub fn weekly(&self) -> f64 {
        match self {
            Compensation::Salaried { yearly, .. } => yearly / WEEKS_PER_YEAR,
            Compensation::Hourly { hourly, .. } => hourly * HOURS_PER_WEEK,
        }
    }

    /// The figure shown in the pay column: yearly or hourly rate.
    pub fn rate(&self) -> f64 {
        match self {
            Compensation::Salaried { yearly, .. } => *yearly,
            Compensation::Hourly { hourly, .. } => *hourly,
        }
    }
}

#[derive(Debug)]
pub struct Employee {
    id: u32,
    name: String,
    email: String,
    image: String,
    compensation: Compensation,
}

impl Employee {
    /// Validate every field, then take the next id.
    fn build(name: &str, email: &str, compensation: Compensation) -> Result<Self, ValidationError> {
        validate::name(name)?;
        validate::email(email)?;
        compensation.validate()?;

        Ok(Self {
            id: allocate_id(&NEXT_ID)?,
            name: name.to_string(),
            email: email.to_string(),
            image: IMAGE_PLACEHOLDER.to_string(),
            compensation,
        })
    }

    pub fn salaried(name: &str, email: &str, yearly: f64) -> Result<Self, ValidationError> {
        Self::build(
            name,
            email,
            Compensation::Salaried {
                yearly,
                grade: SalariedGrade::Plain,
            },
        )
    }

    pub fn hourly(name: &str, email: &str, hourly: f64) -> Result<Self, ValidationError> {
        Self::build(
            name,
            email,
            Compensation::Hourly {
                hourly,
                tenure: HourlyTenure::Plain,
            },
        )
    }

    pub fn executive(
        name: &str,
        email: &str,
        yearly: f64,
        role: Role,
    ) -> Result<Self, ValidationError> {
        Self::build(
            name,
            email,
            Compensation::Salaried {
                yearly,
                grade: SalariedGrade::Executive(role),
            },
        )
    }

    pub fn manager(
        name: &str,
        email: &str,
        yearly: f64,
        department: Department,
    ) -> Result<Self, ValidationError> {
        Self::build(
            name,
            email,
            Compensation::Salaried {
                yearly,
                grade: SalariedGrade::Manager(department),
            },
        )
    }

    pub fn permanent(
        name: &str,
        email: &str,
        hourly: f64,
        hired_date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        Self::build(
            name,
            email,
            Compensation::Hourly {
                hourly,
                tenure: HourlyTenure::Permanent { hired_date },
            },
        )
    }

    pub fn temporary(
        name: &str,
        email: &str,
        hourly: f64,
        last_day: NaiveDate,
    ) -> Result<Self, ValidationError> {
        Self::build(
            name,
            email,
            Compensation::Hourly {
                hourly,
                tenure: HourlyTenure::Temporary { last_day },
            },
        )
    }

    // ---------------------------
    // Getters
    // ---------------------------

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn compensation(&self) -> &Compensation {
        &self.compensation
    }

    pub fn employee_type(&self) -> EmployeeType {
        self.compensation.employee_type()
    }

    pub fn yearly(&self) -> Option<f64> {
        match self.compensation {
            Compensation::Salaried { yearly, .. } => Some(yearly),
            Compensation::Hourly { .. } => None,
        }
    }

    pub fn hourly_rate(&self) -> Option<f64> {
        match self.compensation {
            Compensation::Hourly { hourly, .. } => Some(hourly),
            Compensation::Salaried { .. } => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self.compensation {
            Compensation::Salaried {
                grade: SalariedGrade::Executive(role),
                ..
            } => Some(role),
            _ => None,
        }
    }

    pub fn department(&self) -> Option<Department> {
        match self.compensation {
            Compensation::Salaried {
                grade: SalariedGrade::Manager(department),
                ..
            } => Some(department),
            _ => None,
        }
    }

    pub fn hired_date(&self) -> Option<NaiveDate> {
        match self.compensation {
            Compensation::Hourly {
                tenure: HourlyTenure::Permanent { hired_date },
                ..
            } => Some(hired_date),
            _ => None,
        }
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        match self.compensation {
            Compensation::Hourly {
                tenure: HourlyTenure::Temporary { last_day },
                ..
            } => Some(last_day),
            _ => None,
        }
    }

    // ---------------------------
    // Setters
    // ---------------------------

    fn not_applicable(&self, field: Field) -> ValidationError {
        ValidationError::NotApplicable {
            field: field.name(),
            kind: self.employee_type().name(),
        }
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        validate::name(name)?;
        self.name = name.to_string();
        Ok(())
    }

    pub fn set_email(&mut self, email: &str) -> Result<(), ValidationError> {
        validate::email(email)?;
        self.email = email.to_string();
        Ok(())
    }

    pub fn set_image(&mut self, image: &str) -> Result<(), ValidationError> {
        validate::image(image)?;
        self.image = image.to_string();
        Ok(())
    }

    /// Same as [`set_image`](Self::set_image) but the file must exist.
    pub fn set_image_checked(&mut self, image: &str) -> Result<(), ValidationError> {
        validate::image_on_disk(image)?;
        self.image = image.to_string();
        Ok(())
    }

    pub fn set_yearly(&mut self, value: f64) -> Result<(), ValidationError> {
        if let Compensation::Salaried { yearly, .. } = &mut self.compensation {
            validate::yearly(value)?;
            *yearly = value;
            return Ok(());
        }
        Err(self.not_applicable(Field::Yearly))
    }

    pub fn set_hourly(&mut self, value: f64) -> Result<(), ValidationError> {
        if let Compensation::Hourly { hourly, .. } = &mut self.compensation {
            validate::hourly(value)?;
            *hourly = value;
            return Ok(());
        }
        Err(self.not_applicable(Field::Hourly))
    }

    pub fn set_role(&mut self, value: Role) -> Result<(), ValidationError> {
        if let Compensation::Salaried {
            grade: SalariedGrade::Executive(role),
            ..
        } = &mut self.compensation
        {
            *role = value;
            return Ok(());
        }
        Err(self.not_applicable(Field::Role))
    }

    pub fn set_department(&mut self, value: Department) -> Result<(), ValidationError> {
        if let Compensation::Salaried {
            grade: SalariedGrade::Manager(department),
            ..
        } = &mut self.compensation
        {
            *department = value;
            return Ok(());
        }
        Err(self.not_applicable(Field::Department))
    }

    pub fn set_hired_date(&mut self, value: NaiveDate) -> Result<(), ValidationError> {
        if let Compensation::Hourly {
            tenure: HourlyTenure::Permanent { hired_date },
            ..
        } = &mut self.compensation
        {
            *hired_date = value;
            return Ok(());
        }
        Err(self.not_applicable(Field::HiredDate))
    }

    pub fn set_last_day(&mut self, value: NaiveDate) -> Result<(), ValidationError> {
        if let Compensation::Hourly {
            tenure: HourlyTenure::Temporary { last_day },
            ..
        } = &mut self.compensation
        {
            *last_day = value;
            return Ok(());
        }
        Err(self.not_applicable(Field::LastDay))
    }

    /// Assign a field from an untyped value.
    ///
    /// The value's variant is checked before its content: an integer is
    /// rejected where a float is expected even if it is in range. The id is
    /// always read-only.
    pub fn set_field(&mut self, field: Field, value: FieldValue) -> Result<(), ValidationError> {
        match field {
            Field::Id => Err(ValidationError::ReadOnly("id")),
            Field::Name => match value {
                FieldValue::Text(s) => self.set_name(&s),
                _ => Err(ValidationError::InvalidName),
            },
            Field::Email => match value {
                FieldValue::Text(s) => self.set_email(&s),
                _ => Err(ValidationError::InvalidEmail(validate::EMAIL_DOMAIN)),
            },
            Field::Image => match value {
                FieldValue::Text(s) => self.set_image(&s),
                _ => Err(ValidationError::InvalidImage),
            },
            Field::Yearly => match value {
                FieldValue::Float(v) => self.set_yearly(v),
                _ if self.yearly().is_none() => Err(self.not_applicable(field)),
                _ => Err(ValidationError::InvalidYearly),
            },
            Field::Hourly => match value {
                FieldValue::Float(v) => self.set_hourly(v),
                _ if self.hourly_rate().is_none() => Err(self.not_applicable(field)),
                _ => Err(ValidationError::InvalidHourly),
            },
            Field::Role => {
                if self.role().is_none() {
                    return Err(self.not_applicable(field));
                }
                let role = match value {
                    FieldValue::Text(s) => s.parse::<Role>()?,
                    other => {
                        return Err(InvalidRoleError::new(format!("{:?} is not a role", other)).into());
                    }
                };
                self.set_role(role)
            }
            Field::Department => {
                if self.department().is_none() {
                    return Err(self.not_applicable(field));
                }
                let department = match value {
                    FieldValue::Text(s) => s.parse::<Department>()?,
                    other => {
                        return Err(InvalidDepartmentError::new(format!(
                            "{:?} is not a department",
                            other
                        ))
                        .into());
                    }
                };
                self.set_department(department)
            }
            Field::HiredDate => match value {
                FieldValue::Date(d) => self.set_hired_date(d),
                _ if self.hired_date().is_none() => Err(self.not_applicable(field)),
                _ => Err(ValidationError::InvalidHiredDate),
            },
            Field::LastDay => match value {
                FieldValue::Date(d) => self.set_last_day(d),
                _ if self.last_day().is_none() => Err(self.not_applicable(field)),
                _ => Err(ValidationError::InvalidLastDay),
            },
        }
    }

    // ---------------------------
    // Pay & formatting
    // ---------------------------

    /// Weekly pay for the pay report.
    pub fn calc_pay(&self) -> f64 {
        self.compensation.weekly()
    }

    /// Every concrete field of the record, type name first.
    ///
    /// Floats use the `Debug` form so they always keep a fractional part
    /// (`50001.0`); dates use the `!`-separated form of [`encode_date`].
    pub fn to_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.employee_type().name().to_string(),
            self.name.clone(),
            self.email.clone(),
            self.image.clone(),
        ];

        match self.compensation {
            Compensation::Salaried { yearly, grade } => {
                fields.push(format!("{:?}", yearly));
                match grade {
                    SalariedGrade::Plain => {}
                    SalariedGrade::Executive(role) => fields.push(role.name().to_string()),
                    SalariedGrade::Manager(dep) => fields.push(dep.name().to_string()),
                }
            }
            Compensation::Hourly { hourly, tenure } => {
                fields.push(format!("{:?}", hourly));
                match tenure {
                    HourlyTenure::Plain => {}
                    HourlyTenure::Permanent { hired_date } => fields.push(encode_date(hired_date)),
                    HourlyTenure::Temporary { last_day } => fields.push(encode_date(last_day)),
                }
            }
        }

        fields
    }

    /// Long form: `TypeName,name,email,image,<variant fields...>`.
    pub fn long_form(&self) -> String {
        self.to_fields().join(",")
    }
}

/// Short form: `id:name`.
impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.name)
    }
}
