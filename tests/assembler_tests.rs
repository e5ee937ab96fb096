use chrono::{NaiveDate, NaiveTime};
use shiftscan::core::Classifier;
use shiftscan::core::assembler::{Assembler, Expect};
use shiftscan::core::date_resolver::resolve_table_date;
use shiftscan::core::validator::build_record;
use shiftscan::models::PartialRecord;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 27).unwrap()
}

#[test]
fn test_cursor_walks_name_role_start_end() {
    let c = Classifier::default();
    let mut a = Assembler::new(&c, date());
    assert_eq!(a.expecting(), Expect::Name);

    a.feed("渡邊遼");
    assert_eq!(a.expecting(), Expect::Role);
    assert_eq!(a.current().name.as_deref(), Some("渡邊遼"));

    a.feed("ホール");
    assert_eq!(a.expecting(), Expect::Start);

    a.feed("10:00");
    assert_eq!(a.expecting(), Expect::End);
    assert!(a.current().has_start());

    a.feed("16:00");
    assert_eq!(a.expecting(), Expect::Name);
    assert!(a.current().is_empty());
    assert_eq!(a.records().len(), 1);
}

#[test]
fn test_noise_line_keeps_cursor_without_start_time() {
    let c = Classifier::default();
    let mut a = Assembler::new(&c, date());
    a.feed("渡邊遼");
    a.feed("氏名");
    a.feed("12");

    assert_eq!(a.expecting(), Expect::Role);
    assert_eq!(a.current().name.as_deref(), Some("渡邊遼"));
    assert!(a.records().is_empty());
}

#[test]
fn test_unusable_line_moves_role_cursor_to_start() {
    let c = Classifier::default();
    let mut a = Assembler::new(&c, date());
    a.feed("渡邊遼");
    a.feed("Sheet1");

    assert_eq!(a.expecting(), Expect::Start);
    assert_eq!(a.current().name.as_deref(), Some("渡邊遼"));
}

#[test]
fn test_unexpected_line_while_expecting_end_finalizes() {
    let c = Classifier::default();
    let mut a = Assembler::new(&c, date());
    for line in ["渡邊遼", "ホール", "10:00", ">>"] {
        a.feed(line);
    }

    assert_eq!(a.expecting(), Expect::Name);
    assert_eq!(a.records().len(), 1);
    assert_eq!(a.records()[0].end_time, None);
}

#[test]
fn test_name_while_expecting_end_is_redispatched() {
    let c = Classifier::default();
    let mut a = Assembler::new(&c, date());
    for line in ["渡邊遼", "ホール", "10:00", "金田翔"] {
        a.feed(line);
    }

    assert_eq!(a.records().len(), 1);
    assert_eq!(a.expecting(), Expect::Role);
    assert_eq!(a.current().name.as_deref(), Some("金田翔"));
}

#[test]
fn test_finish_discards_name_only_leftover() {
    let c = Classifier::default();
    let mut a = Assembler::new(&c, date());
    a.feed("渡邊遼");
    a.feed("ホール");

    assert!(a.finish().is_empty());
}

#[test]
fn test_resolve_table_date_scans_every_line() {
    let c = Classifier::default();
    let lines = ["シフト表", "区別", "12月 3日", "1月1日"];
    assert_eq!(
        resolve_table_date(&c, &lines, 2025),
        NaiveDate::from_ymd_opt(2025, 12, 3)
    );
    assert_eq!(resolve_table_date(&c, &["氏名", "10:00"], 2025), None);
}

#[test]
fn test_build_record_normalizes_midnight() {
    let partial = PartialRecord {
        start_time: Some("16:00".into()),
        end_time: Some("24:00".into()),
        ..PartialRecord::with_name("金田翔")
    };
    let record = build_record(&partial, date()).expect("valid record");

    assert_eq!(record.end_time, NaiveTime::from_hms_opt(0, 0, 0));
    assert_eq!(record.name.as_deref(), Some("金田翔"));
}

#[test]
fn test_build_record_rejects_bad_times() {
    for raw in ["9:5", "24:30", "12:60", "ab:cd"] {
        let partial = PartialRecord {
            start_time: Some(raw.into()),
            ..PartialRecord::default()
        };
        assert!(build_record(&partial, date()).is_err(), "{raw} should fail");
    }
}

#[test]
fn test_build_record_ignores_times_on_holidays() {
    let partial = PartialRecord {
        start_time: Some("99:99".into()),
        is_holiday: true,
        ..PartialRecord::with_name("渡邊遼")
    };
    let record = build_record(&partial, date()).expect("holiday record");

    assert!(record.is_holiday);
    assert_eq!(record.start_time, None);
}
