//! Time-accounting and payroll calculator.
//!
//! Pure functions only: no I/O, no shared state. Incomplete or malformed
//! clock data is a normal "not worked yet" state and yields 0 / `""`.

pub mod money;
pub mod payroll;
pub mod worked;

pub use money::{MONEY_LIMIT, round_hours_to_integer, round_hours_to_one_decimal, round_money};
pub use payroll::{HOURS_PER_STANDARD_SHIFT, daily_value, total_hours_decimal, total_value};
pub use worked::{
    is_valid_time, minutes_to_hhmm, minutes_worked, minutes_worked_in_day, total_hours_worked,
    total_minutes_worked,
};
