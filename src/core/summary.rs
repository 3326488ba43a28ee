//! Per-worker summary grouped and subtotalled by sector.

use crate::core::calculator::{minutes_to_hhmm, total_minutes_worked, total_value};
use crate::models::{ExtraRequest, RequestStatus};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Which requests enter the summary.
#[derive(Debug, Clone, Default)]
pub struct SummaryFilter {
    pub status: Option<RequestStatus>,
    pub sector: Option<String>,
    pub range: Option<(NaiveDate, NaiveDate)>,
}

impl SummaryFilter {
    pub fn matches(&self, request: &ExtraRequest) -> bool {
        if let Some(status) = self.status
            && request.status != status
        {
            return false;
        }
        if let Some(sector) = &self.sector
            && !request.sector.eq_ignore_ascii_case(sector.trim())
        {
            return false;
        }
        match self.range {
            Some((start, end)) => request.overlaps(start, end),
            None => true,
        }
    }
}

/// Flat summary line (one per request).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub code: String,
    pub worker: String,
    pub period: String,
    pub sector: String,
    pub value_type: String,
    pub hours: String,
    pub value: i64,
    #[serde(skip)]
    pub minutes: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectorGroup {
    pub sector: String,
    pub rows: Vec<SummaryRow>,
    pub subtotal_hours: String,
    pub subtotal_value: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub groups: Vec<SectorGroup>,
    pub total_hours: String,
    pub total_value: i64,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &SummaryRow> {
        self.groups.iter().flat_map(|g| g.rows.iter())
    }
}

pub fn summary_row(request: &ExtraRequest) -> SummaryRow {
    let minutes = total_minutes_worked(&request.work_days);
    SummaryRow {
        code: request.code.clone(),
        worker: request.worker_name.clone(),
        period: format_period(request),
        sector: request.sector.clone(),
        value_type: request.value_label().to_string(),
        hours: minutes_to_hhmm(minutes as f64),
        value: total_value(request),
        minutes,
    }
}

/// Build the summary: sectors in alphabetical order, workers by name.
pub fn build_summary(requests: &[ExtraRequest], filter: &SummaryFilter) -> Summary {
    let mut by_sector: BTreeMap<String, Vec<SummaryRow>> = BTreeMap::new();

    for req in requests.iter().filter(|r| filter.matches(r)) {
        by_sector
            .entry(req.sector.clone())
            .or_default()
            .push(summary_row(req));
    }

    let mut total_minutes = 0;
    let mut total = 0;
    let mut groups = Vec::with_capacity(by_sector.len());

    for (sector, mut rows) in by_sector {
        rows.sort_by(|a, b| a.worker.cmp(&b.worker).then_with(|| a.code.cmp(&b.code)));

        let minutes: i64 = rows.iter().map(|r| r.minutes).sum();
        let value: i64 = rows.iter().map(|r| r.value).sum();
        total_minutes += minutes;
        total += value;

        groups.push(SectorGroup {
            sector,
            rows,
            subtotal_hours: minutes_to_hhmm(minutes as f64),
            subtotal_value: value,
        });
    }

    Summary {
        groups,
        total_hours: minutes_to_hhmm(total_minutes as f64),
        total_value: total,
    }
}

/// "dd/mm/yyyy a dd/mm/yyyy", or a single date for one-day requests.
fn format_period(request: &ExtraRequest) -> String {
    match (request.first_day(), request.last_day()) {
        (Some(first), Some(last)) if first == last => first.format("%d/%m/%Y").to_string(),
        (Some(first), Some(last)) => format!(
            "{} a {}",
            first.format("%d/%m/%Y"),
            last.format("%d/%m/%Y")
        ),
        _ => String::new(),
    }
}
