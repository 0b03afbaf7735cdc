//! Numeric day/week offsets: "N일 전/후", "N주 전/후".
//!
//! 후 shifts forward, 전 shifts back. Whitespace between the number, the
//! unit and the direction token is optional ("17일후" == "17일 후").
//!
//! Magnitudes the calendar cannot hold resolve to absence, like any other
//! impossible value: the shift is built with `try_days`/`try_weeks` and
//! applied with `checked_add_signed`, never unchecked arithmetic.

use chrono::{Duration, NaiveDateTime};
use regex::Captures;

use crate::DatePattern;

/// "17일 후", "27일전"
pub fn pattern_day_offset() -> DatePattern {
    date_pattern! {
        name: "N일 전/후",
        matcher: r"(\d+)\s*일\s*(전|후)",
        resolve: resolve_day_offset,
    }
}

/// "2주 후", "2주 전"
pub fn pattern_week_offset() -> DatePattern {
    date_pattern! {
        name: "N주 전/후",
        matcher: r"(\d+)\s*주\s*(전|후)",
        resolve: resolve_week_offset,
    }
}

fn resolve_day_offset(captures: &Captures<'_>, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    reference.checked_add_signed(Duration::try_days(signed_amount(captures)?)?)
}

fn resolve_week_offset(captures: &Captures<'_>, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    reference.checked_add_signed(Duration::try_weeks(signed_amount(captures)?)?)
}

/// Group 1 is the magnitude, group 2 the direction token.
fn signed_amount(captures: &Captures<'_>) -> Option<i64> {
    let amount: i64 = captures.get(1)?.as_str().parse().ok()?;
    match captures.get(2)?.as_str() {
        "후" => Some(amount),
        "전" => Some(-amount),
        _ => None,
    }
}
