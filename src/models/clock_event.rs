use super::time_record::TimeRecord;
use std::fmt;

/// A clock event registered by the portaria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    Arrival,
    BreakStart,
    BreakEnd,
    Departure,
}

impl ClockEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockEvent::Arrival => "arrival",
            ClockEvent::BreakStart => "break_start",
            ClockEvent::BreakEnd => "break_end",
            ClockEvent::Departure => "departure",
        }
    }

    /// The record field this event writes to.
    pub fn field_mut<'a>(&self, record: &'a mut TimeRecord) -> &'a mut Option<String> {
        match self {
            ClockEvent::Arrival => &mut record.arrival,
            ClockEvent::BreakStart => &mut record.break_start,
            ClockEvent::BreakEnd => &mut record.break_end,
            ClockEvent::Departure => &mut record.departure,
        }
    }
}

impl fmt::Display for ClockEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
