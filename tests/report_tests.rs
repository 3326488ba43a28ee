mod common;

use common::{day, record, request};
use extrapay::core::logic::Core;
use extrapay::core::receipt::build_receipt;
use extrapay::core::summary::{SummaryFilter, build_summary};
use extrapay::export::range::parse_range;
use extrapay::models::{ExtraRequest, RequestStatus, ValueType};

fn hourly_request() -> ExtraRequest {
    request(
        110.0,
        ValueType::Hourly,
        vec![
            day("2025-09-02", None),
            day("2025-09-01", Some(record("08:00", "16:20").with_break("12:00", "13:00"))),
        ],
    )
}

#[test]
fn test_receipt_rows_and_total() {
    let receipt = build_receipt(&hourly_request());

    assert_eq!(receipt.rows.len(), 2);

    let first = &receipt.rows[0];
    assert_eq!(first.date, "01/09/2025");
    assert_eq!(first.arrival, "08:00");
    assert_eq!(first.break_start, "12:00");
    assert_eq!(first.break_end, "13:00");
    assert_eq!(first.departure, "16:20");
    assert_eq!(first.hours, "07:20");
    assert_eq!(first.value, Some(110));

    // day without clock data: blank row
    let second = &receipt.rows[1];
    assert_eq!(second.date, "02/09/2025");
    assert_eq!(second.arrival, "");
    assert_eq!(second.hours, "");
    assert_eq!(second.value, None);

    assert_eq!(receipt.total.date, "TOTAL");
    assert_eq!(receipt.total.hours, "07:20");
    assert_eq!(receipt.total.value, Some(110));
}

#[test]
fn test_receipt_consolidated_shows_only_total() {
    let mut req = hourly_request();
    req.consolidated_total = Some(250.0);

    let receipt = build_receipt(&req);
    assert!(receipt.rows.iter().all(|r| r.value.is_none()));
    assert_eq!(receipt.total.value, Some(250));
    assert_eq!(receipt.value_label, "Consolidado");
}

#[test]
fn test_receipt_combinado_shows_value_per_day() {
    let req = request(
        75.0,
        ValueType::Combinado,
        vec![day("2025-09-01", None), day("2025-09-02", None)],
    );
    let receipt = build_receipt(&req);
    assert!(receipt.rows.iter().all(|r| r.value == Some(76)));
    assert_eq!(receipt.total.value, Some(150));
}

fn sample_requests() -> Vec<ExtraRequest> {
    let mut a = hourly_request();

    let mut b = request(
        50.0,
        ValueType::Combinado,
        vec![day("2025-10-01", None), day("2025-10-02", None)],
    );
    b.id = 2;
    b.code = "EXT-00002".into();
    b.worker_name = "Bruno".into();
    b.sector = "Cozinha".into();

    let mut c = request(100.0, ValueType::Combinado, vec![day("2025-09-10", None)]);
    c.id = 3;
    c.code = "EXT-00003".into();
    c.worker_name = "Ana".into();
    c.status = RequestStatus::Cancelado;

    a.worker_name = "Maria".into();
    vec![a, b, c]
}

#[test]
fn test_summary_groups_by_sector_with_subtotals() {
    let requests = sample_requests();
    let filter = SummaryFilter {
        status: Some(RequestStatus::Aprovado),
        ..Default::default()
    };
    let summary = build_summary(&requests, &filter);

    let sectors: Vec<&str> = summary.groups.iter().map(|g| g.sector.as_str()).collect();
    assert_eq!(sectors, vec!["Cozinha", "Logística"]);

    let cozinha = &summary.groups[0];
    assert_eq!(cozinha.rows.len(), 1);
    assert_eq!(cozinha.rows[0].period, "01/10/2025 a 02/10/2025");
    assert_eq!(cozinha.rows[0].value_type, "Combinado");
    assert_eq!(cozinha.subtotal_value, 100);
    assert_eq!(cozinha.subtotal_hours, "");

    let logistica = &summary.groups[1];
    assert_eq!(logistica.rows[0].worker, "Maria");
    assert_eq!(logistica.subtotal_value, 110);
    assert_eq!(logistica.subtotal_hours, "07:20");

    assert_eq!(summary.total_value, 210);
    assert_eq!(summary.total_hours, "07:20");
    assert_eq!(summary.rows().count(), 2);
}

#[test]
fn test_summary_filters_by_range_and_sector() {
    let requests = sample_requests();

    let filter = SummaryFilter {
        status: None,
        sector: None,
        range: Some(parse_range("2025-09").unwrap()),
    };
    let summary = build_summary(&requests, &filter);
    let codes: Vec<&str> = summary.rows().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["EXT-00003", "EXT-00001"]);

    let filter = SummaryFilter {
        sector: Some("cozinha".into()),
        ..Default::default()
    };
    let summary = build_summary(&requests, &filter);
    assert_eq!(summary.rows().count(), 1);

    let filter = SummaryFilter {
        range: Some(parse_range("2024").unwrap()),
        ..Default::default()
    };
    assert!(build_summary(&requests, &filter).is_empty());
}

#[test]
fn test_parse_range_shapes() {
    let (a, b) = parse_range("2025-02").unwrap();
    assert_eq!(a.to_string(), "2025-02-01");
    assert_eq!(b.to_string(), "2025-02-28");

    let (a, b) = parse_range("2024-12:2025-01").unwrap();
    assert_eq!(a.to_string(), "2024-12-01");
    assert_eq!(b.to_string(), "2025-01-31");

    let (a, b) = parse_range("2025-09-01:2025-09-15").unwrap();
    assert_eq!(a.to_string(), "2025-09-01");
    assert_eq!(b.to_string(), "2025-09-15");

    assert!(parse_range("2025:2025-01").is_err());
    assert!(parse_range("2025-13").is_err());
    assert!(parse_range("2025-09-15:2025-09-01").is_err());
}

#[test]
fn test_request_totals() {
    let totals = Core::request_totals(&hourly_request());
    assert_eq!(totals.minutes, 440);
    assert_eq!(totals.hours, "07:20");
    assert_eq!(totals.hours_decimal, 7.3);
    assert_eq!(totals.hours_whole, 7.0);
    assert_eq!(totals.value, 110);
    assert_eq!(totals.complete_days, 1);
}
