mod common;

use common::{day, record, request};
use extrapay::core::calculator::{
    HOURS_PER_STANDARD_SHIFT, MONEY_LIMIT, daily_value, minutes_to_hhmm, minutes_worked_in_day,
    round_hours_to_integer, round_hours_to_one_decimal, round_money, total_hours_worked,
    total_value,
};
use extrapay::models::{TimeRecord, ValueType};

#[test]
fn test_round_money_reference_table() {
    assert_eq!(round_money(100.56), 102);
    assert_eq!(round_money(100.54), 100);
    assert_eq!(round_money(100.55), 100);
    assert_eq!(round_money(127.05), 128);
    assert_eq!(round_money(123.50), 124);
}

#[test]
fn test_round_money_is_even_and_idempotent() {
    let mut v = -50.0;
    while v < 500.0 {
        let r = round_money(v);
        assert_eq!(r % 2, 0, "odd result for {v}");
        assert_eq!(round_money(r as f64), r, "not idempotent for {v}");
        v += 0.37;
    }
}

#[test]
fn test_round_money_huge_values_are_clamped_and_even() {
    let limit = MONEY_LIMIT as i64;
    for v in [1e19, f64::MAX, MONEY_LIMIT, MONEY_LIMIT + 0.99] {
        let r = round_money(v);
        assert_eq!(r % 2, 0, "odd result for {v}");
        assert_eq!(r, limit);
    }
    for v in [-1e19, f64::MIN, -MONEY_LIMIT] {
        let r = round_money(v);
        assert_eq!(r % 2, 0, "odd result for {v}");
        assert_eq!(r, -limit);
    }
}

#[test]
fn test_total_value_with_huge_amounts_does_not_overflow() {
    let days = vec![
        day("2025-09-01", Some(record("08:00", "20:00"))),
        day("2025-09-02", Some(record("08:00", "20:00"))),
        day("2025-09-03", Some(record("08:00", "20:00"))),
    ];

    let hourly = request(1e19, ValueType::Hourly, days.clone());
    assert_eq!(total_value(&hourly), MONEY_LIMIT as i64);

    let combinado = request(1e19, ValueType::Combinado, days.clone());
    assert_eq!(total_value(&combinado), MONEY_LIMIT as i64);

    let mut consolidated = request(110.0, ValueType::Hourly, days);
    consolidated.consolidated_total = Some(f64::MAX);
    assert_eq!(total_value(&consolidated), MONEY_LIMIT as i64);
}

#[test]
fn test_round_money_non_finite_is_zero() {
    assert_eq!(round_money(f64::NAN), 0);
    assert_eq!(round_money(f64::INFINITY), 0);
}

#[test]
fn test_round_money_cents_rounding_up_to_a_whole_unit() {
    // 0.999 → 100 cents → rounds the unit up, then parity
    assert_eq!(round_money(100.999), 102);
    assert_eq!(round_money(101.0), 102);
    assert_eq!(round_money(0.0), 0);
}

#[test]
fn test_midnight_rollover() {
    assert_eq!(minutes_worked_in_day(&record("23:00", "01:00")), 120);
}

#[test]
fn test_night_shift_with_break() {
    let r = record("22:00", "06:00").with_break("23:00", "23:30");
    assert_eq!(minutes_worked_in_day(&r), 450);
}

#[test]
fn test_inverted_break_is_ignored() {
    let r = record("08:00", "17:00").with_break("13:00", "12:00");
    assert_eq!(minutes_worked_in_day(&r), 540);
}

#[test]
fn test_break_is_deducted() {
    let r = record("08:00", "17:00").with_break("12:00", "13:00");
    assert_eq!(minutes_worked_in_day(&r), 480);
}

#[test]
fn test_half_break_is_ignored() {
    let mut r = record("08:00", "17:00");
    r.break_start = Some("12:00".into());
    assert_eq!(minutes_worked_in_day(&r), 540);
}

#[test]
fn test_missing_departure_is_zero() {
    let r = TimeRecord::new(Some("08:00"), None);
    assert_eq!(minutes_worked_in_day(&r), 0);
    assert_eq!(minutes_worked_in_day(&TimeRecord::default()), 0);
}

#[test]
fn test_malformed_times_are_treated_as_absent() {
    assert_eq!(minutes_worked_in_day(&record("8h00", "17:00")), 0);
    assert_eq!(minutes_worked_in_day(&record("08:00", "17:00:00")), 0);
    assert_eq!(minutes_worked_in_day(&record(" 08:00", "17:00")), 0);
    assert_eq!(minutes_worked_in_day(&record("8:00", "17:00")), 540);

    // malformed break: no deduction
    let r = record("08:00", "17:00").with_break("12", "13:00");
    assert_eq!(minutes_worked_in_day(&r), 540);
}

#[test]
fn test_worked_minutes_never_negative() {
    // break longer than the shift
    let r = record("08:00", "09:00").with_break("07:00", "12:00");
    assert_eq!(minutes_worked_in_day(&r), 0);
}

#[test]
fn test_minutes_to_hhmm() {
    assert_eq!(minutes_to_hhmm(0.0), "");
    assert_eq!(minutes_to_hhmm(-5.0), "");
    assert_eq!(minutes_to_hhmm(426.0), "07:06");
    assert_eq!(minutes_to_hhmm(440.0), "07:20");
    assert_eq!(minutes_to_hhmm(6000.0), "100:00");
}

#[test]
fn test_minutes_to_hhmm_keeps_rounded_remainder() {
    // remainder 59.6 rounds to 60 without carrying into the hours
    assert_eq!(minutes_to_hhmm(119.6), "01:60");
    assert_eq!(minutes_to_hhmm(60.4), "01:00");
}

#[test]
fn test_total_hours_worked_sums_days() {
    let days = vec![
        day("2025-09-01", Some(record("08:00", "16:20").with_break("12:00", "13:00"))),
        day("2025-09-02", Some(record("23:00", "01:00"))),
        day("2025-09-03", None),
    ];
    assert_eq!(total_hours_worked(&days), "09:20");
    assert_eq!(total_hours_worked(&[]), "");
}

#[test]
fn test_combinado_scales_with_days() {
    let req = request(
        50.0,
        ValueType::Combinado,
        vec![
            day("2025-09-01", None),
            day("2025-09-02", None),
            day("2025-09-03", None),
        ],
    );
    assert_eq!(total_value(&req), round_money(150.0));
    for d in &req.work_days {
        assert_eq!(daily_value(&req, d), 50);
    }
}

#[test]
fn test_combinado_without_days_counts_one() {
    let req = request(51.0, ValueType::Combinado, vec![]);
    assert_eq!(total_value(&req), 52);
}

#[test]
fn test_hourly_standard_shift() {
    let req = request(
        110.0,
        ValueType::Hourly,
        vec![day("2025-09-01", Some(record("08:00", "15:20")))],
    );
    assert_eq!(daily_value(&req, &req.work_days[0]), round_money(110.0));
    assert_eq!(total_value(&req), 110);
    assert!((HOURS_PER_STANDARD_SHIFT - 7.0 - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_hourly_rounds_each_day_before_summing() {
    // 4h of a 110 shift = 60.0 → 60; 1h = 15.0 → 16 (odd → even)
    let req = request(
        110.0,
        ValueType::Hourly,
        vec![
            day("2025-09-01", Some(record("08:00", "12:00"))),
            day("2025-09-02", Some(record("08:00", "09:00"))),
            day("2025-09-03", None),
        ],
    );
    let daily: Vec<i64> = req.work_days.iter().map(|d| daily_value(&req, d)).collect();
    assert_eq!(daily, vec![60, 16, 0]);
    assert_eq!(total_value(&req), 76);
}

#[test]
fn test_consolidated_total_overrides_everything() {
    for vt in [ValueType::Combinado, ValueType::Hourly] {
        let mut req = request(
            110.0,
            vt,
            vec![
                day("2025-09-01", Some(record("08:00", "15:20"))),
                day("2025-09-02", Some(record("08:00", "15:20"))),
            ],
        );
        req.consolidated_total = Some(300.55);

        for d in &req.work_days {
            assert_eq!(daily_value(&req, d), 0);
        }
        assert_eq!(total_value(&req), round_money(300.55));
    }
}

#[test]
fn test_consolidated_zero_is_not_unset() {
    let mut req = request(
        110.0,
        ValueType::Combinado,
        vec![day("2025-09-01", None)],
    );
    req.consolidated_total = Some(0.0);
    assert_eq!(total_value(&req), 0);
}

#[test]
fn test_round_hours_helpers() {
    assert_eq!(round_hours_to_integer(7.5), 8.0);
    assert_eq!(round_hours_to_integer(7.49), 7.0);
    assert_eq!(round_hours_to_one_decimal(7.33), 7.3);
    assert_eq!(round_hours_to_one_decimal(7.25), 7.3);
}
