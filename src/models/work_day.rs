use super::time_record::TimeRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar date of a request, with its assigned shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkDay {
    pub date: NaiveDate, // "YYYY-MM-DD"
    #[serde(default)]
    pub shift: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<TimeRecord>,
}

impl WorkDay {
    pub fn new(date: NaiveDate, shift: &str) -> Self {
        Self {
            date,
            shift: shift.to_string(),
            record: None,
        }
    }

    pub fn with_record(mut self, record: TimeRecord) -> Self {
        self.record = Some(record);
        self
    }

    /// Date as shown on receipts (dd/mm/yyyy).
    pub fn date_br(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    /// Mutable access to the record, creating an empty one on first use.
    pub fn record_mut(&mut self) -> &mut TimeRecord {
        self.record.get_or_insert_with(TimeRecord::default)
    }
}
