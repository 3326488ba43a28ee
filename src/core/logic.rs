use crate::core::calculator::{self, total_minutes_worked};
use crate::models::ExtraRequest;

/// Derived figures of one request, as shown by `list`.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestTotals {
    pub minutes: i64,
    pub hours: String,
    pub hours_decimal: f64,
    pub hours_whole: f64,
    pub value: i64,
    pub complete_days: usize,
}

pub struct Core;

impl Core {
    pub fn request_totals(request: &ExtraRequest) -> RequestTotals {
        let minutes = total_minutes_worked(&request.work_days);
        let complete_days = request
            .work_days
            .iter()
            .filter(|d| d.record.as_ref().is_some_and(|r| r.is_complete()))
            .count();

        RequestTotals {
            minutes,
            hours: calculator::minutes_to_hhmm(minutes as f64),
            hours_decimal: calculator::total_hours_decimal(&request.work_days),
            hours_whole: calculator::round_hours_to_integer(minutes as f64 / 60.0),
            value: calculator::total_value(request),
            complete_days,
        }
    }
}
