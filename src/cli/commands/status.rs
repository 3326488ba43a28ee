use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lifecycle;
use crate::errors::AppResult;
use crate::models::ExtraRequest;
use crate::store::{RequestStore, log};
use crate::ui::messages::success;

type Transition = fn(&mut ExtraRequest) -> AppResult<()>;

/// Handle `approve`, `reject` and `cancel`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (id, operation, apply): (&String, &str, Transition) = match cmd {
        Commands::Approve { id } => (id, "approve", lifecycle::approve),
        Commands::Reject { id } => (id, "reject", lifecycle::reject),
        Commands::Cancel { id } => (id, "cancel", lifecycle::cancel),
        _ => return Ok(()),
    };

    let mut store = RequestStore::open(&cfg.data_file)?;

    let request = store.find_mut(id)?;
    let from = request.status;
    apply(request)?;

    let code = request.code.clone();
    let to = request.status;

    log::ttlog(&mut store, operation, &code, &format!("{from} -> {to}"));
    store.save()?;

    success(format!("Request {code}: {from} → {to}"));
    Ok(())
}
