//! Monetary and hour rounding.

/// Largest magnitude handled by [`round_money`]. Inputs beyond it are
/// clamped, keeping every result an exact, even `i64`.
pub const MONEY_LIMIT: f64 = 9.0e15;

/// Payroll rounding to an even amount of whole currency units.
///
/// Cents from 56 up round the unit up, 55 and below round it down; an odd
/// result is then bumped to the next even number. This is not half-up
/// rounding: 100.55 → 100, 100.56 → 102, 127.05 → 128.
pub fn round_money(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let value = value.clamp(-MONEY_LIMIT, MONEY_LIMIT);
    let units = value.floor();
    let cents = ((value - units) * 100.0).round();

    let mut result = units as i64;
    if cents >= 56.0 {
        result += 1;
    }
    if result % 2 != 0 {
        result += 1;
    }
    result
}

/// Hours rounded half away from zero to a whole number (display only).
pub fn round_hours_to_integer(hours: f64) -> f64 {
    hours.round()
}

/// Hours rounded half away from zero to one decimal place (display only).
pub fn round_hours_to_one_decimal(hours: f64) -> f64 {
    (hours * 10.0).round() / 10.0
}
