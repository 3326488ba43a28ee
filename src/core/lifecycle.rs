//! Status transitions of an extra request.

use crate::errors::{AppError, AppResult};
use crate::models::{ExtraRequest, RequestStatus};

/// Move `request` to `next`, rejecting transitions out of a terminal state.
pub fn transition(request: &mut ExtraRequest, next: RequestStatus) -> AppResult<()> {
    if !request.status.can_transition_to(next) {
        return Err(AppError::InvalidTransition {
            code: request.code.clone(),
            from: request.status,
            to: next,
        });
    }
    request.status = next;
    Ok(())
}

/// Approver accepts the request.
pub fn approve(request: &mut ExtraRequest) -> AppResult<()> {
    transition(request, RequestStatus::Aprovado)
}

/// Approver refuses the request.
pub fn reject(request: &mut ExtraRequest) -> AppResult<()> {
    transition(request, RequestStatus::Reprovado)
}

/// Requester withdraws the request.
pub fn cancel(request: &mut ExtraRequest) -> AppResult<()> {
    transition(request, RequestStatus::Cancelado)
}
