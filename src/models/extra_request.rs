use super::{status::RequestStatus, value_type::ValueType, work_day::WorkDay};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A payroll request for one extra worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraRequest {
    pub id: u32,
    pub code: String, // "EXT-00001"
    pub worker_name: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub requester: String,
    #[serde(default)]
    pub leader: String,
    #[serde(default)]
    pub reason: String,
    pub value: f64,
    pub value_type: ValueType,
    /// When present, replaces every per-day / value-type computation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consolidated_total: Option<f64>,
    pub status: RequestStatus,
    #[serde(default)]
    pub work_days: Vec<WorkDay>,
    #[serde(default)]
    pub created_at: String,
}

impl ExtraRequest {
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.work_days.iter().map(|d| d.date).min()
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.work_days.iter().map(|d| d.date).max()
    }

    pub fn work_day(&self, date: NaiveDate) -> Option<&WorkDay> {
        self.work_days.iter().find(|d| d.date == date)
    }

    pub fn work_day_mut(&mut self, date: NaiveDate) -> Option<&mut WorkDay> {
        self.work_days.iter_mut().find(|d| d.date == date)
    }

    /// True when at least one work day falls inside `[start, end]`.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.work_days
            .iter()
            .any(|d| d.date >= start && d.date <= end)
    }

    /// Label of the payment model as shown in summaries.
    pub fn value_label(&self) -> &'static str {
        if self.consolidated_total.is_some() {
            "Consolidado"
        } else {
            self.value_type.label()
        }
    }
}
