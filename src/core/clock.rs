//! Portaria workflow: clock events written in place on a request's work day.

use crate::core::calculator::is_valid_time;
use crate::errors::{AppError, AppResult};
use crate::models::{ClockEvent, ExtraRequest, RequestStatus};
use chrono::NaiveDate;

/// Register `event` at `time` on the work day `date` of `request`.
///
/// - only approved requests accept clock events;
/// - `time` must be `H:MM` / `HH:MM`;
/// - a field already set is replaced only when `overwrite` is true.
pub fn register_clock(
    request: &mut ExtraRequest,
    date: NaiveDate,
    event: ClockEvent,
    time: &str,
    overwrite: bool,
) -> AppResult<()> {
    if request.status != RequestStatus::Aprovado {
        return Err(AppError::NotApproved(request.code.clone()));
    }

    let time = time.trim();
    if !is_valid_time(time) {
        return Err(AppError::InvalidTime(time.to_string()));
    }

    let code = request.code.clone();
    let day = request
        .work_day_mut(date)
        .ok_or_else(|| AppError::WorkDayNotFound {
            code,
            date: date.format("%Y-%m-%d").to_string(),
        })?;

    let field = event.field_mut(day.record_mut());

    if let Some(existing) = field.as_deref()
        && !overwrite
    {
        return Err(AppError::AlreadyClocked {
            event: event.to_string(),
            time: existing.to_string(),
        });
    }

    *field = Some(time.to_string());
    Ok(())
}
