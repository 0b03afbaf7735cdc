use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::{Context, parse_with};

/// 2024-10-20 is a Sunday; every relative-date case below depends on that.
fn reference_context() -> Context {
    let date = NaiveDate::from_ymd_opt(2024, 10, 20).unwrap();
    let time = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
    Context { reference_time: NaiveDateTime::new(date, time) }
}

fn resolve_date(input: &str) -> String {
    let ctx = reference_context();
    let resolved = parse_with(input, &ctx).unwrap_or_else(|| panic!("no match for {input:?}"));
    resolved.date().format("%Y-%m-%d").to_string()
}

#[test]
fn date_examples_matching() {
    // Array of (expected_date, input_string)
    let cases: Vec<(&str, &str)> = vec![
        ("2024-10-20", "오늘"),
        ("2024-10-21", "내일"),
        ("2024-10-22", "모레"),
        ("2024-10-19", "어제"),
        ("2024-10-18", "그제"),
        ("2024-10-21", "1일 후"),
        ("2024-10-21", "1일후"),
        ("2024-10-27", "7일 후"),
        ("2024-11-06", "17일 후"),
        ("2024-11-06", "17일후"),
        ("2024-10-19", "1일 전"),
        ("2024-10-13", "7일 전"),
        ("2024-10-03", "17일 전"),
        ("2024-09-23", "27일전"),
        ("2024-11-03", "2주 후"),
        ("2024-10-06", "2주 전"),
        ("2024-10-18", "이번 주 금요일"),
        ("2024-10-21", "다음 주 월요일"),
        ("2024-10-25", "다음 주 금요일"),
        ("2024-10-31", "다다음 주 목요일"),
        ("2024-11-07", "다다다음 주 목요일"),
        ("2024-10-10", "지난 주 목요일"),
        ("2024-10-10", "저번 주 목요일"),
        ("2023-12-25", "2023년 12월 25일"),
        ("2024-02-29", "2024년 2월 29일"),
    ];

    for (expected, input) in cases {
        assert_eq!(resolve_date(input), expected, "input: {input:?}");
    }
}

#[test]
fn whitespace_between_tokens_is_optional() {
    assert_eq!(resolve_date("2023년12월25일"), "2023-12-25");
    assert_eq!(resolve_date("2023년12월25일"), resolve_date("2023년 12월 25일"));
    assert_eq!(resolve_date("다음주월요일"), resolve_date("다음 주 월요일"));
    assert_eq!(resolve_date("이번주 금요일"), resolve_date("이번 주 금요일"));
}

#[test]
fn meridiem_times_resolve_on_the_reference_date() {
    let ctx = reference_context();

    let afternoon = parse_with("오후 3시 30분", &ctx).unwrap();
    assert_eq!(afternoon.date(), ctx.reference_time.date());
    assert_eq!((afternoon.hour(), afternoon.minute(), afternoon.second()), (15, 30, 0));

    let midnight = parse_with("오전 12시", &ctx).unwrap();
    assert_eq!((midnight.hour(), midnight.minute()), (0, 0));

    let noon = parse_with("오후 12시", &ctx).unwrap();
    assert_eq!((noon.hour(), noon.minute()), (12, 0));

    let morning = parse_with("오전 9시", &ctx).unwrap();
    assert_eq!((morning.hour(), morning.minute()), (9, 0));
}

#[test]
fn unrecognized_text_is_absent() {
    let ctx = reference_context();
    assert_eq!(parse_with("잘못된 날짜", &ctx), None);
    assert_eq!(parse_with("", &ctx), None);
    assert_eq!(parse_with("다음 달", &ctx), None);
}

#[test]
fn calendar_invalid_values_are_absent() {
    let ctx = reference_context();
    assert_eq!(parse_with("2024년 13월 1일", &ctx), None);
    assert_eq!(parse_with("2024년 2월 30일", &ctx), None);
    assert_eq!(parse_with("2023년 2월 29일", &ctx), None);
    assert_eq!(parse_with("오후 13시", &ctx), None);
    assert_eq!(parse_with("오전 0시", &ctx), None);
    assert_eq!(parse_with("오전 3시 60분", &ctx), None);

    // Offsets the calendar cannot hold resolve to absence, never a panic:
    // a duration-out-of-bounds magnitude, one past the representable date
    // range, and one past i64 entirely.
    assert_eq!(parse_with("9223372036854775807일 후", &ctx), None);
    assert_eq!(parse_with("100000000일 후", &ctx), None);
    assert_eq!(parse_with("999999999999주 전", &ctx), None);
    assert_eq!(parse_with("99999999999999999999일 전", &ctx), None);
}

#[test]
fn expressions_match_inside_longer_phrases() {
    assert_eq!(resolve_date("내일 보자"), "2024-10-21");
    assert_eq!(resolve_date("회의는 다음 주 월요일"), "2024-10-21");
}
