use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of an extra request.
///
/// `Solicitado` is the only non-terminal state: an approver moves it to
/// `Aprovado` or `Reprovado`, the requester may move it to `Cancelado`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestStatus {
    Solicitado,
    Aprovado,
    Reprovado,
    Cancelado,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Solicitado => "SOLICITADO",
            RequestStatus::Aprovado => "APROVADO",
            RequestStatus::Reprovado => "REPROVADO",
            RequestStatus::Cancelado => "CANCELADO",
        }
    }

    /// Parse user input (case-insensitive).
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "SOLICITADO" => Some(RequestStatus::Solicitado),
            "APROVADO" => Some(RequestStatus::Aprovado),
            "REPROVADO" => Some(RequestStatus::Reprovado),
            "CANCELADO" => Some(RequestStatus::Cancelado),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, RequestStatus::Solicitado)
    }

    pub fn can_transition_to(&self, next: RequestStatus) -> bool {
        matches!(
            (self, next),
            (
                RequestStatus::Solicitado,
                RequestStatus::Aprovado | RequestStatus::Reprovado | RequestStatus::Cancelado
            )
        )
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
