use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{ValueType, WorkDay};
use crate::store::{NewRequest, RequestStore, log};
use crate::ui::messages::success;
use crate::utils::date;

/// Create a new request in status SOLICITADO.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::New {
        worker,
        sector,
        role,
        requester,
        leader,
        reason,
        value,
        combinado,
        consolidated,
        days,
    } = cmd
    {
        //
        // 1. Parse work days ("YYYY-MM-DD" or "YYYY-MM-DD=SHIFT")
        //
        let work_days = days
            .iter()
            .map(|d| parse_work_day(d))
            .collect::<AppResult<Vec<_>>>()?;

        let value_type = if *combinado {
            ValueType::Combinado
        } else {
            ValueType::Hourly
        };

        //
        // 2. Create + log + save
        //
        let mut store = RequestStore::open(&cfg.data_file)?;

        let code = store.create(NewRequest {
            worker_name: worker.clone(),
            sector: sector.clone(),
            role: role.clone(),
            requester: requester.clone(),
            leader: leader.clone(),
            reason: reason.clone(),
            value: *value,
            value_type,
            consolidated_total: *consolidated,
            work_days,
        })?;

        log::ttlog(
            &mut store,
            "new",
            &code,
            &format!("Request created for {} ({} day(s))", worker.trim(), days.len()),
        );
        store.save()?;

        success(format!("Request {code} created (SOLICITADO)"));
    }

    Ok(())
}

fn parse_work_day(arg: &str) -> AppResult<WorkDay> {
    let (d, shift) = match arg.split_once('=') {
        Some((d, s)) => (d, s.trim()),
        None => (arg, ""),
    };

    if d.trim().is_empty() {
        return Err(AppError::InvalidDate(arg.to_string()));
    }

    Ok(WorkDay::new(date::parse_date(d)?, shift))
}
