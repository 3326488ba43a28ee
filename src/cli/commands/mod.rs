pub mod clock;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod new;
pub mod receipt;
pub mod status;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::RequestStatus;

/// Resolve a `--status` argument: `all` disables the filter, no value falls
/// back to the configured default.
pub(crate) fn resolve_status(
    arg: &Option<String>,
    cfg: &Config,
) -> AppResult<Option<RequestStatus>> {
    match arg.as_deref().map(str::trim) {
        None => cfg.default_status_filter(),
        Some(s) if s.eq_ignore_ascii_case("all") => Ok(None),
        Some(s) => RequestStatus::from_code(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidStatus(s.to_string())),
    }
}
