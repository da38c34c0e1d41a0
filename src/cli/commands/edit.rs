use crate::cli::parser::{Commands, FieldArgs};
use crate::config::Config;
use crate::core::edit::{EditLogic, EmployeeUpdate};
use crate::errors::AppResult;
use crate::store::Roster;

impl From<&FieldArgs> for EmployeeUpdate {
    fn from(f: &FieldArgs) -> Self {
        Self {
            name: f.name.clone(),
            email: f.email.clone(),
            image: f.image.clone(),
            pay: f.pay.clone(),
            role: f.role.clone(),
            department: f.department.clone(),
            hired: f.hired.clone(),
            last_day: f.last_day.clone(),
        }
    }
}

/// Update fields of an existing employee.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, fields } = cmd {
        let mut roster = Roster::load(cfg.data_path())?;
        EditLogic::apply(
            &mut roster,
            *id,
            &EmployeeUpdate::from(fields),
            cfg.check_image_exists,
        )?;
    }

    Ok(())
}
