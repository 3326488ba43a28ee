use serde::{Deserialize, Serialize};

/// Raw clock events of one worker for a single work day.
///
/// Times are kept exactly as registered (`HH:MM`); worked minutes and pay
/// are always derived by the calculator, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_end: Option<String>,
}

impl TimeRecord {
    pub fn new(arrival: Option<&str>, departure: Option<&str>) -> Self {
        Self {
            arrival: arrival.map(str::to_string),
            departure: departure.map(str::to_string),
            ..Default::default()
        }
    }

    pub fn with_break(mut self, start: &str, end: &str) -> Self {
        self.break_start = Some(start.to_string());
        self.break_end = Some(end.to_string());
        self
    }

    /// Arrival and departure are both set (punctuality report definition).
    pub fn is_complete(&self) -> bool {
        is_set(&self.arrival) && is_set(&self.departure)
    }

    /// All four events are set (portaria definition).
    pub fn is_complete_for_portaria(&self) -> bool {
        self.is_complete() && is_set(&self.break_start) && is_set(&self.break_end)
    }
}

fn is_set(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}
