use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{RequestStore, log};
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty requests data file
pub fn handle(cli: &Cli) -> AppResult<()> {
    info("Initializing extrapay…");

    let data_path = Config::init_all(cli.data.clone(), cli.test)?;

    if !cli.test {
        success(format!("Config file : {}", Config::config_file().display()));
    }
    success(format!("Data file   : {}", data_path.display()));

    let mut store = RequestStore::open(&data_path.to_string_lossy())?;
    log::ttlog(
        &mut store,
        "init",
        "data file",
        &format!("Data file initialized at {}", data_path.display()),
    );
    store.save()?;

    success("extrapay initialization completed!");
    Ok(())
}
