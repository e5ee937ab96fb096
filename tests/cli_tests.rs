mod common;
use common::{OCR_LOG_SAMPLE, ocr, sst, temp_out, test_home, write_input};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

#[test]
fn test_parse_json_from_file() {
    let input = write_input("parse_json", OCR_LOG_SAMPLE);

    sst()
        .args(["parse", &input, "--year", "2025", "--format", "json"])
        .assert()
        .success()
        .stdout(contains("\"date\": \"2025-05-27\""))
        .stdout(contains("\"name\": \"渡邊遼\""))
        .stdout(contains("\"end_time\": \"00:00\""))
        .stdout(contains("準備完了").not());
}

#[test]
fn test_parse_table_from_stdin() {
    let text = ocr(&["5月27日", "渡邊遼", "ホール", "10:00", "16:00"]);

    sst()
        .args(["parse", "--year", "2025"])
        .write_stdin(text)
        .assert()
        .success()
        .stdout(contains("start_time"))
        .stdout(contains("渡邊遼"))
        .stdout(contains("10:00"));
}

#[test]
fn test_parse_csv() {
    let input = write_input("parse_csv", OCR_LOG_SAMPLE);

    sst()
        .args(["parse", &input, "--year", "2025", "--format", "csv"])
        .assert()
        .success()
        .stdout(contains(
            "date,name,role,start_time,end_time,is_holiday,memo",
        ))
        .stdout(contains("2025-05-27,渡邊遼,ホール,10:00,16:00,false,"));
}

#[test]
fn test_parse_without_date_warns_and_succeeds() {
    let text = ocr(&["渡邊遼", "ホール", "10:00", "16:00"]);

    sst()
        .args(["parse"])
        .write_stdin(text)
        .assert()
        .success()
        .stdout(contains("渡邊遼").not())
        .stderr(contains("No shift records"));
}

#[test]
fn test_classify_lists_kinds() {
    let text = ocr(&["5月27日", "シフト表 No.1", "3", "渡邊遼", "ホール", "10:00", "休み", "Sheet1"]);

    sst()
        .args(["classify"])
        .write_stdin(text)
        .assert()
        .success()
        .stdout(contains("date-header"))
        .stdout(contains("header"))
        .stdout(contains("row-number"))
        .stdout(contains("name"))
        .stdout(contains("role"))
        .stdout(contains("time"))
        .stdout(contains("holiday"))
        .stdout(contains("unclassified"));
}

#[test]
fn test_summary_output() {
    let text = ocr(&[
        "5月27日", "渡邊遼", "休み", "金田翔", "フロント", "16:00", "0:00",
    ]);

    sst()
        .args(["summary", "--year", "2025"])
        .write_stdin(text)
        .assert()
        .success()
        .stdout(contains("シフト情報を解析しました:"))
        .stdout(contains("- 05/27: 渡邊遼 休み"))
        .stdout(contains("- 05/27: 金田翔 16:00～00:00 (フロント)"));
}

#[test]
fn test_export_json_file() {
    let input = write_input("export_json", OCR_LOG_SAMPLE);
    let out = temp_out("export_json", "json");

    sst()
        .args([
            "export", &input, "--format", "json", "--file", &out, "--year", "2025",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(rows.as_array().map(Vec::len), Some(4));
    assert_eq!(rows[3]["name"], "太田悠登");
}

#[test]
fn test_export_csv_file() {
    let input = write_input("export_csv", OCR_LOG_SAMPLE);
    let out = temp_out("export_csv", "csv");

    sst()
        .args(["export", &input, "--file", &out, "--year", "2025"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("date,name,role"));
    assert_eq!(content.lines().count(), 5);
}

#[test]
fn test_export_refuses_existing_file_without_force() {
    let input = write_input("export_exists", OCR_LOG_SAMPLE);
    let out = temp_out("export_exists", "csv");
    fs::write(&out, "keep me").expect("seed output file");

    sst()
        .args(["export", &input, "--file", &out, "--year", "2025"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    sst()
        .args(["export", &input, "--file", &out, "--year", "2025", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("渡邊荅士"));
}

#[test]
fn test_export_with_no_records_fails() {
    let input = write_input("export_empty", "no table here");
    let out = temp_out("export_empty", "json");

    sst()
        .args(["export", &input, "--format", "json", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("No shift records"));
    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_init_and_custom_config() {
    let conf = test_home().join("custom_roles.conf");
    let conf = conf.to_string_lossy().to_string();
    fs::remove_file(&conf).ok();

    sst()
        .args(["--config", &conf, "init"])
        .assert()
        .success();
    assert!(fs::read_to_string(&conf).unwrap().contains("ホール"));

    // second init without --force must not clobber the file
    sst().args(["--config", &conf, "init"]).assert().failure();

    fs::write(&conf, "role_keywords: [キッチン]\ndefault_format: json\n").unwrap();
    let text = ocr(&["5月27日", "渡邊遼", "キッチン", "10:00", "16:00"]);

    sst()
        .args(["--config", &conf, "parse", "--year", "2025"])
        .write_stdin(text)
        .assert()
        .success()
        .stdout(contains("\"role\": \"キッチン\""));

    sst()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("キッチン"))
        .stdout(contains("休み"));
}

#[test]
fn test_missing_custom_config_is_an_error() {
    sst()
        .args(["--config", "/nonexistent/shiftscan.conf", "parse"])
        .write_stdin("5月27日")
        .assert()
        .failure()
        .stderr(contains("configuration file not found"));
}
