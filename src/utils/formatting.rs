//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Whole currency units with `.` thousands separators: `R$ 1.234`.
pub fn format_currency(symbol: &str, amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if amount < 0 { "-" } else { "" };
    if symbol.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{symbol} {grouped}")
    }
}

/// Optional amount: `""` when there is nothing to show.
pub fn format_optional_currency(symbol: &str, amount: Option<i64>) -> String {
    amount
        .map(|a| format_currency(symbol, a))
        .unwrap_or_default()
}

/// Decimal hours with a comma, as in "7,3 h".
pub fn format_hours_decimal(hours: f64) -> String {
    format!("{:.1} h", hours).replace('.', ",")
}
