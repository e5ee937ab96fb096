#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// OCR output of a four-row shift table, as read column by column with the
/// sheet's row numbers and spreadsheet chrome mixed in.
pub const OCR_LOG_SAMPLE: &str = "
シフト表
5月 27日
区別
氏名
担当
開始時間終了時間
3
渡邊遼
ホール
10:00
16:00
4
渡邊荅士
フロント
10:00
16:00
5
6
金田翔
フロント
16:00
0:00
7
太田悠登
ホール
16:00
0:00
8
6
10
11
12
13
14
E
15
>>
Sheet1
準備完了
アクセシビリティ: 問題ありません ページ: 1/2
検索
SC
F1
3
";

pub fn sst() -> Command {
    let mut cmd = cargo_bin_cmd!("shiftscan");
    // keep the user's real configuration out of the tests
    cmd.env("HOME", test_home()).env("NO_COLOR", "1");
    cmd
}

pub fn test_home() -> PathBuf {
    let mut path = env::temp_dir();
    path.push("shiftscan_test_home");
    fs::create_dir_all(&path).ok();
    path
}

/// Write `text` to a fresh input file inside the temp dir.
pub fn write_input(name: &str, text: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ocr.txt", name));
    fs::write(&path, text).expect("write ocr input");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftscan_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Join lines into one OCR text blob.
pub fn ocr(lines: &[&str]) -> String {
    lines.join("\n")
}
