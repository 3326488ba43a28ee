//! Receipt (recibo) of one request: one row per work day plus a TOTAL row.

use crate::core::calculator::{
    daily_value, minutes_to_hhmm, minutes_worked, total_hours_worked, total_value,
};
use crate::models::{ExtraRequest, ValueType, WorkDay};
use serde::Serialize;

/// One receipt line. Empty strings / `None` mean "no data yet".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptRow {
    pub date: String, // dd/mm/yyyy, or "TOTAL"
    pub arrival: String,
    pub break_start: String,
    pub break_end: String,
    pub departure: String,
    pub hours: String,
    pub value: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub code: String,
    pub worker_name: String,
    pub sector: String,
    pub role: String,
    pub requester: String,
    pub leader: String,
    pub reason: String,
    pub value_label: String,
    pub rows: Vec<ReceiptRow>,
    pub total: ReceiptRow,
}

pub fn build_receipt(request: &ExtraRequest) -> Receipt {
    let mut days: Vec<&WorkDay> = request.work_days.iter().collect();
    days.sort_by_key(|d| d.date);

    let rows = days.into_iter().map(|d| receipt_row(request, d)).collect();

    let total = ReceiptRow {
        date: "TOTAL".to_string(),
        arrival: String::new(),
        break_start: String::new(),
        break_end: String::new(),
        departure: String::new(),
        hours: total_hours_worked(&request.work_days),
        value: Some(total_value(request)),
    };

    Receipt {
        code: request.code.clone(),
        worker_name: request.worker_name.clone(),
        sector: request.sector.clone(),
        role: request.role.clone(),
        requester: request.requester.clone(),
        leader: request.leader.clone(),
        reason: request.reason.clone(),
        value_label: request.value_label().to_string(),
        rows,
        total,
    }
}

fn receipt_row(request: &ExtraRequest, day: &WorkDay) -> ReceiptRow {
    let record = day.record.clone().unwrap_or_default();
    let minutes = minutes_worked(day);

    // Consolidated requests show only the total; hourly days without
    // worked minutes stay blank.
    let value = match (request.consolidated_total, request.value_type) {
        (Some(_), _) => None,
        (None, ValueType::Combinado) => Some(daily_value(request, day)),
        (None, ValueType::Hourly) if minutes > 0 => Some(daily_value(request, day)),
        (None, ValueType::Hourly) => None,
    };

    ReceiptRow {
        date: day.date_br(),
        arrival: record.arrival.unwrap_or_default(),
        break_start: record.break_start.unwrap_or_default(),
        break_end: record.break_end.unwrap_or_default(),
        departure: record.departure.unwrap_or_default(),
        hours: minutes_to_hhmm(minutes as f64),
        value,
    }
}
