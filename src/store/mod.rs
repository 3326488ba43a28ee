//! JSON data file holding the requests and the internal operation log.

pub mod log;

use crate::core::calculator::MONEY_LIMIT;
use crate::errors::{AppError, AppResult};
use crate::models::{ExtraRequest, RequestStatus, ValueType, WorkDay};
use chrono::Local;
use self::log::LogEntry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
struct DataFile {
    #[serde(default)]
    requests: Vec<ExtraRequest>,
    #[serde(default)]
    log: Vec<LogEntry>,
}

/// Fields supplied by the requester when a new request is created.
#[derive(Debug, Clone)]
pub struct NewRequest {
    pub worker_name: String,
    pub sector: String,
    pub role: String,
    pub requester: String,
    pub leader: String,
    pub reason: String,
    pub value: f64,
    pub value_type: ValueType,
    pub consolidated_total: Option<f64>,
    pub work_days: Vec<WorkDay>,
}

pub struct RequestStore {
    path: PathBuf,
    pub requests: Vec<ExtraRequest>,
    pub log: Vec<LogEntry>,
}

impl RequestStore {
    /// Open the data file; a missing file is an empty store.
    pub fn open(path: &str) -> AppResult<Self> {
        let path = PathBuf::from(path);

        let data = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                DataFile::default()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            DataFile::default()
        };

        Ok(Self {
            path,
            requests: data.requests,
            log: data.log,
        })
    }

    /// Write the whole store back, pretty-printed.
    pub fn save(&self) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let data = DataFile {
            requests: self.requests.clone(),
            log: self.log.clone(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&data)?)?;
        Ok(())
    }

    /// Look a request up by code (`EXT-00001`, case-insensitive) or numeric id.
    pub fn find(&self, key: &str) -> AppResult<&ExtraRequest> {
        let idx = self.position(key)?;
        Ok(&self.requests[idx])
    }

    pub fn find_mut(&mut self, key: &str) -> AppResult<&mut ExtraRequest> {
        let idx = self.position(key)?;
        Ok(&mut self.requests[idx])
    }

    fn position(&self, key: &str) -> AppResult<usize> {
        let key = key.trim();
        let id = key.parse::<u32>().ok();

        self.requests
            .iter()
            .position(|r| r.code.eq_ignore_ascii_case(key) || Some(r.id) == id)
            .ok_or_else(|| AppError::RequestNotFound(key.to_string()))
    }

    fn next_id(&self) -> u32 {
        self.requests.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }

    /// Create a new request in status SOLICITADO and return its code.
    pub fn create(&mut self, new: NewRequest) -> AppResult<String> {
        if new.worker_name.trim().is_empty() {
            return Err(AppError::InvalidRequest("worker name is required".into()));
        }
        if new.work_days.is_empty() {
            return Err(AppError::InvalidRequest(
                "at least one work day is required".into(),
            ));
        }
        if !new.value.is_finite() || !(0.0..=MONEY_LIMIT).contains(&new.value) {
            return Err(AppError::InvalidRequest(format!(
                "value must be a number between 0 and {MONEY_LIMIT}: {}",
                new.value
            )));
        }
        if let Some(total) = new.consolidated_total
            && (!total.is_finite() || !(0.0..=MONEY_LIMIT).contains(&total))
        {
            return Err(AppError::InvalidRequest(format!(
                "consolidated total must be a number between 0 and {MONEY_LIMIT}: {total}"
            )));
        }

        let mut work_days = new.work_days;
        work_days.sort_by_key(|d| d.date);
        if work_days.windows(2).any(|w| w[0].date == w[1].date) {
            return Err(AppError::InvalidRequest("duplicated work day".into()));
        }

        let id = self.next_id();
        let code = format!("EXT-{id:05}");

        self.requests.push(ExtraRequest {
            id,
            code: code.clone(),
            worker_name: new.worker_name.trim().to_string(),
            sector: new.sector.trim().to_string(),
            role: new.role,
            requester: new.requester,
            leader: new.leader,
            reason: new.reason,
            value: new.value,
            value_type: new.value_type,
            consolidated_total: new.consolidated_total,
            status: RequestStatus::Solicitado,
            work_days,
            created_at: Local::now().to_rfc3339(),
        });

        Ok(code)
    }
}
