use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::RequestStatus;
use crate::store::{RequestStore, log};
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Receipt {
        id,
        format,
        file,
        force,
    } = cmd
    {
        let mut store = RequestStore::open(&cfg.data_file)?;
        let request = store.find(id)?.clone();

        if request.status != RequestStatus::Aprovado {
            warning(format!(
                "Request {} is {}: the receipt is not final.",
                request.code, request.status
            ));
        }

        ExportLogic::export_receipt(&request, *format, file, *force, cfg)?;

        log::ttlog(
            &mut store,
            "receipt",
            &request.code,
            &format!("{} receipt written to {}", format.as_str(), file),
        );
        store.save()?;
    }
    Ok(())
}
