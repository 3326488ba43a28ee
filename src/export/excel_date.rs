// src/export/excel_date.rs

use chrono::NaiveDate;

/// Interpret a receipt/summary date cell (dd/mm/yyyy) as an Excel serial,
/// returning the number format to apply with it.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    let d = NaiveDate::parse_from_str(s.trim(), "%d/%m/%Y").ok()?;
    Some(("dd/mm/yyyy", naive_date_to_excel_serial(&d)))
}

fn naive_date_to_excel_serial(d: &NaiveDate) -> f64 {
    // Excel day 0 (accounts for the 1900 leap-year bug).
    let Some(excel_epoch) = NaiveDate::from_ymd_opt(1899, 12, 30) else {
        return 0.0;
    };
    d.signed_duration_since(excel_epoch).num_days() as f64
}
