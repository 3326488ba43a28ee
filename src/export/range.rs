// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Parse a period filter (year / month / day / interval).
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start_raw, end_raw) = match r.split_once(':') {
        Some((s, e)) => (s.trim(), e.trim()),
        None => (r.trim(), r.trim()),
    };

    if start_raw.len() != end_raw.len() {
        return Err(invalid(r, "start and end must have same format"));
    }

    let (start, _) = bounds(start_raw).ok_or_else(|| invalid(r, "invalid start"))?;
    let (_, end) = bounds(end_raw).ok_or_else(|| invalid(r, "invalid end"))?;

    if end < start {
        return Err(invalid(r, "end is before start"));
    }
    Ok((start, end))
}

/// First and last day covered by a single period expression.
fn bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").ok()?;
            let last = match first.month0() {
                11 => NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)?,
                m => NaiveDate::from_ymd_opt(first.year(), m + 2, 1)?,
            }
            .pred_opt()?;
            Some((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").ok()?;
            Some((d, d))
        }
        _ => None,
    }
}

fn invalid(r: &str, why: &str) -> AppError {
    AppError::InvalidDate(format!("{r}: {why}"))
}
