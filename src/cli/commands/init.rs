use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::audit;
use crate::errors::AppResult;
use crate::store::Roster;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped with `--test`)
///  - an empty data file, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    info("Initializing acmehr…");

    let data_path = Config::init_all(cli.data.as_deref(), cli.test)?;

    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Data file   : {}", data_path.display()));

    // Make sure an existing file is readable before declaring success
    let roster = Roster::load(&data_path)?;

    audit(
        &data_path,
        "init",
        &data_path.to_string_lossy(),
        &format!("Data file ready with {} employees", roster.len()),
    );

    success("acmehr initialization completed!");
    Ok(())
}
