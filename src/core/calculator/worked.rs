//! Worked-time accounting for a single day and for a list of days.

use crate::models::{TimeRecord, WorkDay};
use regex::Regex;
use std::sync::LazyLock;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Literal pattern: cannot fail to compile.
    Regex::new(r"^\d{1,2}:\d{2}$").unwrap()
});

/// True when `s` has the `H:MM` / `HH:MM` shape accepted by the calculator.
pub fn is_valid_time(s: &str) -> bool {
    TIME_RE.is_match(s)
}

/// Minutes since midnight for a well-formed time, `None` for anything else.
pub fn parse_minutes(value: Option<&str>) -> Option<i64> {
    let s = value?;
    if !is_valid_time(s) {
        return None;
    }
    let (h, m) = s.split_once(':')?;
    Some(h.parse::<i64>().ok()? * 60 + m.parse::<i64>().ok()?)
}

/// Net minutes worked in one day.
///
/// - arrival and departure are both required, otherwise 0;
/// - a departure earlier than the arrival crosses midnight;
/// - the break is deducted only when both ends are set and end > start
///   (break times are never rolled over midnight).
pub fn minutes_worked_in_day(record: &TimeRecord) -> i64 {
    let (Some(arrival), Some(departure)) = (
        parse_minutes(record.arrival.as_deref()),
        parse_minutes(record.departure.as_deref()),
    ) else {
        return 0;
    };

    let departure = if departure < arrival {
        departure + MINUTES_PER_DAY
    } else {
        departure
    };

    let break_minutes = match (
        parse_minutes(record.break_start.as_deref()),
        parse_minutes(record.break_end.as_deref()),
    ) {
        (Some(start), Some(end)) if end > start => end - start,
        _ => 0,
    };

    (departure - arrival - break_minutes).max(0)
}

/// Same as [`minutes_worked_in_day`] for a work day (0 without a record).
pub fn minutes_worked(day: &WorkDay) -> i64 {
    day.record.as_ref().map_or(0, minutes_worked_in_day)
}

/// Sum of worked minutes over all days.
pub fn total_minutes_worked(days: &[WorkDay]) -> i64 {
    days.iter().map(minutes_worked).sum()
}

/// `HH:MM` with a zero-padded hour; `""` for zero, negative or NaN input.
///
/// The minute remainder is rounded, not truncated: a remainder of 59.5 or
/// more renders as `60`. Printed receipts depend on this output, so the
/// overflow is not carried into the hours.
pub fn minutes_to_hhmm(total_minutes: f64) -> String {
    if total_minutes.is_nan() || total_minutes <= 0.0 {
        return String::new();
    }
    let hours = (total_minutes / 60.0).floor();
    let minutes = (total_minutes % 60.0).round();
    format!("{:02}:{:02}", hours as i64, minutes as i64)
}

/// Total hours worked over all days, formatted as `HH:MM`.
pub fn total_hours_worked(days: &[WorkDay]) -> String {
    minutes_to_hhmm(total_minutes_worked(days) as f64)
}
