use crate::cli::commands::resolve_status;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::{RequestStore, log};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        status,
        force,
    } = cmd
    {
        let mut store = RequestStore::open(&cfg.data_file)?;
        let status = resolve_status(status, cfg)?;

        ExportLogic::export_summary(&store.requests, *format, file, range, status, *force, cfg)?;

        log::ttlog(
            &mut store,
            "export",
            file,
            &format!(
                "{} summary export (range: {})",
                format.as_str(),
                range.as_deref().unwrap_or("all")
            ),
        );
        store.save()?;
    }
    Ok(())
}
