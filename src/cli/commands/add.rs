use crate::cli::parser::{Commands, FieldArgs};
use crate::config::Config;
use crate::core::add::{AddLogic, NewEmployee};
use crate::errors::{AppError, AppResult};
use crate::models::EmployeeType;
use crate::store::Roster;

impl From<&FieldArgs> for NewEmployee {
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

/// Add a new employee.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { kind, fields } = cmd {
        //
        // 1. Parse employee type (mandatory)
        //
        let kind = EmployeeType::from_code(kind).ok_or_else(|| {
            AppError::InvalidEmployeeType(format!(
                "'{}'. Use one of Salaried, Hourly, Executive, Manager, Permanent, Temporary",
                kind
            ))
        })?;

        //
        // 2. Load the roster, then build, append and save
        //
        let mut roster = Roster::load(cfg.data_path())?;
        AddLogic::apply(
            &mut roster,
            kind,
            &NewEmployee::from(fields),
            cfg.check_image_exists,
        )?;
    }

    Ok(())
}
