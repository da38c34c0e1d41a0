use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::Roster;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let roster = Roster::load(cfg.data_path())?;
        ExportLogic::export(&roster, *format, file, *force, &cfg.currency_symbol)?;
    }
    Ok(())
}
