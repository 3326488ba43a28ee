mod common;
use common::{init_data_with_requests, setup_data_file, temp_out, xp};
use predicates::str::contains;
use serde_json::Value;
use std::fs;

#[test]
fn test_receipt_json() {
    let data = setup_data_file("export_receipt_json");
    init_data_with_requests(&data);
    let out = temp_out("export_receipt_json", "json");

    xp().args([
        "--data", &data, "receipt", "EXT-00001", "--format", "json", "--file", &out,
    ])
    .assert()
    .success();

    let v: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v["code"], "EXT-00001");
    assert_eq!(v["rows"][0]["date"], "01/09/2025");
    assert_eq!(v["rows"][0]["hours"], "07:20");
    assert_eq!(v["total"]["value"], 110);
}

#[test]
fn test_receipt_csv_has_total_row() {
    let data = setup_data_file("export_receipt_csv");
    init_data_with_requests(&data);
    let out = temp_out("export_receipt_csv", "csv");

    xp().args([
        "--data", &data, "receipt", "EXT-00002", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Data,Entrada"));
    assert!(content.contains("01/09/2025"));
    assert!(content.contains("02/09/2025"));
    assert!(content.contains("TOTAL,,,,,,220"));
}

#[test]
fn test_receipt_pdf_and_xlsx_are_written() {
    let data = setup_data_file("export_receipt_binary");
    init_data_with_requests(&data);

    let pdf = temp_out("export_receipt_binary", "pdf");
    xp().args([
        "--data", &data, "receipt", "EXT-00001", "--format", "pdf", "--file", &pdf,
    ])
    .assert()
    .success();
    let bytes = fs::read(&pdf).unwrap();
    assert!(bytes.starts_with(b"%PDF"));

    let xlsx = temp_out("export_receipt_binary", "xlsx");
    xp().args([
        "--data", &data, "receipt", "EXT-00001", "--format", "xlsx", "--file", &xlsx,
    ])
    .assert()
    .success();
    let bytes = fs::read(&xlsx).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_summary_json_grouped_by_sector() {
    let data = setup_data_file("export_summary_json");
    init_data_with_requests(&data);
    let out = temp_out("export_summary_json", "json");

    xp().args([
        "--data", &data, "export", "--format", "json", "--file", &out, "--range", "2025-09",
    ])
    .assert()
    .success();

    let v: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v["groups"][0]["sector"], "Cozinha");
    assert_eq!(v["groups"][0]["subtotal_value"], 220);
    assert_eq!(v["groups"][1]["sector"], "Logística");
    assert_eq!(v["groups"][1]["rows"][0]["hours"], "07:20");
    assert_eq!(v["total_value"], 330);
}

#[test]
fn test_summary_pdf_and_xlsx() {
    let data = setup_data_file("export_summary_binary");
    init_data_with_requests(&data);

    for ext in ["pdf", "xlsx", "csv"] {
        let out = temp_out("export_summary_binary", ext);
        xp().args(["--data", &data, "export", "--format", ext, "--file", &out])
            .assert()
            .success();
        assert!(fs::metadata(&out).unwrap().len() > 0);
    }
}

#[test]
fn test_export_requires_absolute_path() {
    let data = setup_data_file("export_relative");
    init_data_with_requests(&data);

    xp().args([
        "--data", &data, "export", "--format", "csv", "--file", "relative.csv",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file_needs_force() {
    let data = setup_data_file("export_force");
    init_data_with_requests(&data);
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old").unwrap();

    // "n" on stdin: keep the file
    xp().args(["--data", &data, "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "old");

    xp().args([
        "--data", &data, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();
    assert_ne!(fs::read_to_string(&out).unwrap(), "old");
}
