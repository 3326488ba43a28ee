use super::RequestStore;
use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    #[serde(default)]
    pub target: String,
    pub message: String,
}

/// Append an internal log line to the store (persisted on the next save).
pub fn ttlog(store: &mut RequestStore, operation: &str, target: &str, message: &str) {
    // Local time, RFC 3339
    let now = Local::now().to_rfc3339();

    store.log.push(LogEntry {
        date: now,
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    });
}
