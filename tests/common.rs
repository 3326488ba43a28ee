#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use extrapay::models::{ExtraRequest, RequestStatus, TimeRecord, ValueType, WorkDay};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn xp() -> Command {
    cargo_bin_cmd!("extrapay")
}

/// Create a unique data file path inside the system temp dir and remove any existing file
pub fn setup_data_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_extrapay.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_extrapay_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn record(arrival: &str, departure: &str) -> TimeRecord {
    TimeRecord::new(Some(arrival), Some(departure))
}

pub fn day(d: &str, rec: Option<TimeRecord>) -> WorkDay {
    let wd = WorkDay::new(date(d), "Manhã");
    match rec {
        Some(r) => wd.with_record(r),
        None => wd,
    }
}

/// In-memory request used by the library-level tests.
pub fn request(value: f64, value_type: ValueType, work_days: Vec<WorkDay>) -> ExtraRequest {
    ExtraRequest {
        id: 1,
        code: "EXT-00001".to_string(),
        worker_name: "Maria Souza".to_string(),
        sector: "Logística".to_string(),
        role: "Auxiliar".to_string(),
        requester: "Carlos".to_string(),
        leader: "Ana".to_string(),
        reason: "Inventário".to_string(),
        value,
        value_type,
        consolidated_total: None,
        status: RequestStatus::Aprovado,
        work_days,
        created_at: String::new(),
    }
}

/// Initialize a data file via CLI (test mode: config file untouched)
pub fn init_data(data: &str) {
    xp().args(["--data", data, "--test", "init"])
        .assert()
        .success();
}

/// Create one request through the CLI.
pub fn new_request(data: &str, worker: &str, sector: &str, extra: &[&str]) {
    let mut args = vec![
        "--data", data, "new", "--worker", worker, "--sector", sector, "--value", "110",
    ];
    args.extend_from_slice(extra);
    xp().args(&args).assert().success();
}

/// Data file with two approved requests and clocked days:
/// - EXT-00001: hourly, 110 per shift, 2025-09-01 worked 08:00-16:20 with 1h break (7h20)
/// - EXT-00002: combinado 110, days 2025-09-01 and 2025-09-02
pub fn init_data_with_requests(data: &str) {
    init_data(data);

    new_request(data, "Maria Souza", "Logística", &["--day", "2025-09-01=Manhã"]);
    new_request(
        data,
        "João Lima",
        "Cozinha",
        &["--combinado", "--day", "2025-09-01", "--day", "2025-09-02"],
    );

    for id in ["EXT-00001", "EXT-00002"] {
        xp().args(["--data", data, "approve", id]).assert().success();
    }

    xp().args([
        "--data",
        data,
        "clock",
        "EXT-00001",
        "2025-09-01",
        "--in",
        "08:00",
        "--break-start",
        "12:00",
        "--break-end",
        "13:00",
        "--out",
        "16:20",
    ])
    .assert()
    .success();
}
