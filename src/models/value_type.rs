use serde::{Deserialize, Serialize};

/// Payment model of a request.
///
/// On disk only `"combinado"` is meaningful: every other label is read as
/// the hourly model, which is written back as `"hora"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ValueType {
    /// Fixed amount per work day, independent of the hours worked.
    Combinado,
    /// `value` is the pay for one standard 7h20 shift.
    Hourly,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Combinado => "combinado",
            ValueType::Hourly => "hora",
        }
    }

    /// Label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            ValueType::Combinado => "Combinado",
            ValueType::Hourly => "Por hora",
        }
    }
}

impl From<String> for ValueType {
    fn from(s: String) -> Self {
        if s.trim().eq_ignore_ascii_case("combinado") {
            ValueType::Combinado
        } else {
            ValueType::Hourly
        }
    }
}

impl From<ValueType> for String {
    fn from(v: ValueType) -> Self {
        v.as_str().to_string()
    }
}
