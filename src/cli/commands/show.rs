use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::validate::IMAGE_PLACEHOLDER;
use crate::store::Roster;
use crate::ui::messages::{detail, header};
use crate::utils::colors::{colorize_placeholder, colorize_type};
use crate::utils::formatting::{bold, describe_extra};
use crate::utils::money;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let roster = Roster::load(cfg.data_path())?;
        let e = roster.get(*id)?;
        let currency = cfg.currency_symbol.as_str();

        header(e);
        detail("ID#", e.id());
        detail("Type", colorize_type(e.employee_type()));
        detail("Name", bold(e.name()));
        detail("Email", e.email());
        detail(
            "Image",
            colorize_placeholder(e.image(), e.image() == IMAGE_PLACEHOLDER),
        );

        if let Some(yearly) = e.yearly() {
            detail("Yearly", money(yearly, currency));
        }
        if let Some(hourly) = e.hourly_rate() {
            detail("Hourly", money(hourly, currency));
        }
        if let Some((label, value)) = describe_extra(e) {
            detail(&label, value);
        }

        detail("Weekly pay", money(e.calc_pay(), currency));
        println!();
        println!("{}", e.long_form());
    }
    Ok(())
}
