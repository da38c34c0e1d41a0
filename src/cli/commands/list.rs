use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Employee, EmployeeType};
use crate::store::{Roster, RosterRow};
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { kind, long } = cmd {
        let filter = match kind {
            Some(k) => Some(
                EmployeeType::from_code(k).ok_or_else(|| AppError::InvalidEmployeeType(k.clone()))?,
            ),
            None => None,
        };

        let roster = Roster::load(cfg.data_path())?;

        let selected: Vec<&Employee> = roster
            .employees()
            .iter()
            .filter(|e| filter.is_none_or(|t| e.employee_type() == t))
            .collect();

        if selected.is_empty() {
            info("No employees found.");
            return Ok(());
        }

        header(format!("Employees ({})", selected.len()));

        if *long {
            for e in selected {
                println!("{:>4}  {}", e.id(), e.long_form());
            }
        } else {
            let rows: Vec<RosterRow> = selected
                .into_iter()
                .map(|e| RosterRow::from_employee(e, &cfg.currency_symbol))
                .collect();
            print!("{}", render_rows(&rows));
        }
    }
    Ok(())
}

/// The roster table: ID#, Type, Name, Pay, Email.
pub fn render_rows(rows: &[RosterRow]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID#"),
        Column::new("Type"),
        Column::new("Name"),
        Column::new("Pay"),
        Column::new("Email"),
    ]);

    for r in rows {
        table.add_row(vec![
            r.id.to_string(),
            r.kind.clone(),
            r.name.clone(),
            r.pay.clone(),
            r.email.clone(),
        ]);
    }

    table.render()
}
