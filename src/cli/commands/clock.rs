use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::{minutes_to_hhmm, minutes_worked};
use crate::core::clock::register_clock;
use crate::errors::{AppError, AppResult};
use crate::models::ClockEvent;
use crate::store::{RequestStore, log};
use crate::ui::messages::{detail, success, warning};
use crate::utils::date;

/// Register portaria clock events (arrival, break, departure) on a work day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock {
        id,
        date: date_arg,
        arrival,
        break_start,
        break_end,
        departure,
        force,
    } = cmd
    {
        let d = date::parse_date(date_arg)?;

        let events: Vec<(ClockEvent, &String)> = [
            (ClockEvent::Arrival, arrival),
            (ClockEvent::BreakStart, break_start),
            (ClockEvent::BreakEnd, break_end),
            (ClockEvent::Departure, departure),
        ]
        .into_iter()
        .filter_map(|(ev, t)| t.as_ref().map(|t| (ev, t)))
        .collect();

        if events.is_empty() {
            return Err(AppError::InvalidRequest(
                "no clock event given (use --in, --break-start, --break-end or --out)".into(),
            ));
        }

        let mut store = RequestStore::open(&cfg.data_file)?;
        let request = store.find_mut(id)?;

        // All events are applied or none: work on a copy first.
        let mut updated = request.clone();
        for (event, time) in &events {
            register_clock(&mut updated, d, *event, time, *force)?;
        }
        *request = updated;

        let code = request.code.clone();
        let day = request
            .work_day(d)
            .ok_or_else(|| AppError::WorkDayNotFound {
                code: code.clone(),
                date: d.to_string(),
            })?;
        let worked = minutes_worked(day);
        let complete = day.record.as_ref().is_some_and(|r| r.is_complete_for_portaria());

        let registered: Vec<String> = events
            .iter()
            .map(|(ev, t)| format!("{ev}={}", t.trim()))
            .collect();

        log::ttlog(&mut store, "clock", &code, &format!("{d}: {}", registered.join(", ")));
        store.save()?;

        success(format!("Clock events registered for {code} on {}", date::format_br(&d)));
        for r in &registered {
            detail(r);
        }
        if worked > 0 {
            detail(format!("Worked: {}", minutes_to_hhmm(worked as f64)));
        }
        if !complete {
            warning("Work day not complete yet (arrival, break and departure required).");
        }
    }

    Ok(())
}
