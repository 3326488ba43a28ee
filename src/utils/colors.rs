/// ANSI color helper utilities for terminal output.
use crate::models::RequestStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Status color:
/// SOLICITADO → yellow
/// APROVADO → green
/// REPROVADO → red
/// CANCELADO → grey
pub fn color_for_status(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Solicitado => YELLOW,
        RequestStatus::Aprovado => GREEN,
        RequestStatus::Reprovado => RED,
        RequestStatus::Cancelado => GREY,
    }
}
