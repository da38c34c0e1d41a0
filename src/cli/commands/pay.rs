use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pay::PayLogic;
use crate::errors::AppResult;
use crate::store::Roster;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Pay) {
        let roster = Roster::load(cfg.data_path())?;
        PayLogic::print(&roster, &cfg.currency_symbol);
    }

    Ok(())
}
