use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` date given on the command line.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Date as printed on receipts and summaries (dd/mm/yyyy).
pub fn format_br(d: &NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

/// Portuguese month name for a `MM` string ("09" → "Setembro").
pub fn month_name(mm: &str) -> &'static str {
    match mm.trim().parse::<u32>().unwrap_or(0) {
        1 => "Janeiro",
        2 => "Fevereiro",
        3 => "Março",
        4 => "Abril",
        5 => "Maio",
        6 => "Junho",
        7 => "Julho",
        8 => "Agosto",
        9 => "Setembro",
        10 => "Outubro",
        11 => "Novembro",
        12 => "Dezembro",
        _ => "",
    }
}
