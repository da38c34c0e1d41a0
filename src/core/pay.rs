use crate::store::Roster;
use crate::ui::messages::{header, info};
use crate::utils::money;
use crate::utils::table::{Column, Table};

pub struct PayLogic;

impl PayLogic {
    /// Weekly pay report: one row per employee plus the total.
    pub fn report(roster: &Roster, currency: &str) -> String {
        let mut table = Table::new(vec![
            Column::new("ID#"),
            Column::new("Type"),
            Column::new("Name"),
            Column::new("Weekly pay"),
        ]);

        for e in roster.employees() {
            table.add_row(vec![
                e.id().to_string(),
                e.employee_type().name().to_string(),
                e.name().to_string(),
                money(e.calc_pay(), currency),
            ]);
        }

        let mut out = table.render();
        out.push_str(&format!(
            "\nTotal weekly pay: {}\n",
            money(roster.weekly_total(), currency)
        ));
        out
    }

    pub fn print(roster: &Roster, currency: &str) {
        if roster.is_empty() {
            info("No employees on file.");
            return;
        }

        header("Weekly pay report");
        print!("{}", Self::report(roster, currency));
    }
}
