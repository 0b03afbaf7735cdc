use chrono::{NaiveDate, NaiveDateTime};
use regex::Captures;

use crate::DatePattern;

/// "2023년 12월 25일", "2023년12월25일"
pub fn pattern_absolute_date() -> DatePattern {
    date_pattern! {
        name: "YYYY년 MM월 DD일",
        matcher: r"(\d{4})\s*년\s*(\d{1,2})\s*월\s*(\d{1,2})\s*일",
        resolve: resolve_absolute_date,
    }
}

/// Resolves to midnight of the named date. Values that name no real calendar
/// date (month 13, February 30th) resolve to absence rather than rolling
/// over into a neighboring month.
fn resolve_absolute_date(captures: &Captures<'_>, _reference: NaiveDateTime) -> Option<NaiveDateTime> {
    let year: i32 = captures.get(1)?.as_str().parse().ok()?;
    let month: u32 = captures.get(2)?.as_str().parse().ok()?;
    let day: u32 = captures.get(3)?.as_str().parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)
}
