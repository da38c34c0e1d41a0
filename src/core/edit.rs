use crate::core::audit;
use crate::errors::AppResult;
use crate::models::{Field, FieldValue};
use crate::store::Roster;
use crate::ui::messages::{info, success};

/// Raw user input for an edit; `None` leaves the field alone.
#[derive(Debug, Default, Clone)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    pub pay: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub hired: Option<String>,
    pub last_day: Option<String>,
}

impl EmployeeUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.image.is_none()
            && self.pay.is_none()
            && self.role.is_none()
            && self.department.is_none()
            && self.hired.is_none()
            && self.last_day.is_none()
    }

    /// Field assignments in form order: name, email, image, pay, then the
    /// variant field. `pay_field` is `Yearly` or `Hourly` for the target.
    pub fn assignments(&self, pay_field: Field) -> Vec<(Field, FieldValue)> {
        let mut out = Vec::new();

        if let Some(v) = &self.name {
            out.push((Field::Name, FieldValue::text(v.as_str())));
        }
        if let Some(v) = &self.email {
            out.push((Field::Email, FieldValue::text(v.as_str())));
        }
        if let Some(v) = &self.image {
            out.push((Field::Image, FieldValue::text(v.as_str())));
        }
        if let Some(v) = &self.pay {
            out.push((pay_field, FieldValue::from_pay_input(v)));
        }
        if let Some(v) = &self.role {
            out.push((Field::Role, FieldValue::text(v.as_str())));
        }
        if let Some(v) = &self.department {
            out.push((Field::Department, FieldValue::text(v.as_str())));
        }
        if let Some(v) = &self.hired {
            out.push((Field::HiredDate, FieldValue::from_date_input(v)));
        }
        if let Some(v) = &self.last_day {
            out.push((Field::LastDay, FieldValue::from_date_input(v)));
        }

        out
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Apply `update` to employee `id` and save.
    ///
    /// Each assignment is validated on its own and a rejected one keeps the
    /// old value. The first rejection aborts the command before the roster is
    /// saved, so the data file never sees a partly edited record.
    pub fn apply(
        roster: &mut Roster,
        id: u32,
        update: &EmployeeUpdate,
        check_image: bool,
    ) -> AppResult<()> {
        if update.is_empty() {
            info("Nothing to update.");
            return Ok(());
        }

        let employee = roster.get_mut(id)?;
        let before = employee.long_form();

        let pay_field = if employee.employee_type().is_salaried() {
            Field::Yearly
        } else {
            Field::Hourly
        };

        for (field, value) in update.assignments(pay_field) {
            match (field, value) {
                (Field::Image, FieldValue::Text(path)) if check_image => {
                    employee.set_image_checked(&path)?
                }
                (field, value) => employee.set_field(field, value)?,
            }
        }

        let summary = employee.to_string();
        let after = employee.long_form();

        roster.save()?;

        audit(
            roster.path(),
            "edit",
            &summary,
            &format!("{} => {}", before, after),
        );
        success(format!("Updated {}", summary));

        Ok(())
    }
}
