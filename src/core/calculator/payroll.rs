//! Pay derivation for a request under its payment model.

use super::money::{round_hours_to_one_decimal, round_money};
use super::worked::{minutes_worked, total_minutes_worked};
use crate::models::{ExtraRequest, ValueType, WorkDay};

/// Length of the standard shift (7h20) used as the hourly-rate denominator.
pub const HOURS_PER_STANDARD_SHIFT: f64 = 7.0 + 20.0 / 60.0;

/// Pay attributed to a single day of the request.
///
/// A consolidated request attributes its whole value at the total level,
/// so every day is worth 0 here.
pub fn daily_value(request: &ExtraRequest, day: &WorkDay) -> i64 {
    if request.consolidated_total.is_some() {
        return 0;
    }
    match request.value_type {
        ValueType::Combinado => round_money(request.value),
        ValueType::Hourly => {
            let hours = minutes_worked(day) as f64 / 60.0;
            round_money(hours * (request.value / HOURS_PER_STANDARD_SHIFT))
        }
    }
}

/// Total pay of the request.
///
/// Hourly requests sum the already rounded daily values and round again.
pub fn total_value(request: &ExtraRequest) -> i64 {
    if let Some(total) = request.consolidated_total {
        return round_money(total);
    }
    match request.value_type {
        ValueType::Combinado => {
            let days = request.work_days.len().max(1) as f64;
            round_money(request.value * days)
        }
        ValueType::Hourly => {
            let sum = request
                .work_days
                .iter()
                .map(|d| daily_value(request, d))
                .fold(0i64, i64::saturating_add);
            round_money(sum as f64)
        }
    }
}

/// Worked hours as a decimal number with one digit (for summaries).
pub fn total_hours_decimal(days: &[WorkDay]) -> f64 {
    round_hours_to_one_decimal(total_minutes_worked(days) as f64 / 60.0)
}
