//! Named day instants. Each resolves relative to the reference, keeping its
//! time-of-day.

use chrono::{Duration, NaiveDateTime};
use regex::Captures;

use crate::DatePattern;

/// "오늘" (today)
pub fn pattern_today() -> DatePattern {
    date_pattern! {
        name: "오늘",
        matcher: r"오늘",
        resolve: resolve_today,
    }
}

/// "내일" (tomorrow)
pub fn pattern_tomorrow() -> DatePattern {
    date_pattern! {
        name: "내일",
        matcher: r"내일",
        resolve: resolve_tomorrow,
    }
}

/// "모레" (the day after tomorrow)
pub fn pattern_day_after_tomorrow() -> DatePattern {
    date_pattern! {
        name: "모레",
        matcher: r"모레",
        resolve: resolve_day_after_tomorrow,
    }
}

/// "어제" (yesterday)
pub fn pattern_yesterday() -> DatePattern {
    date_pattern! {
        name: "어제",
        matcher: r"어제",
        resolve: resolve_yesterday,
    }
}

/// "그제" (the day before yesterday)
pub fn pattern_day_before_yesterday() -> DatePattern {
    date_pattern! {
        name: "그제",
        matcher: r"그제",
        resolve: resolve_day_before_yesterday,
    }
}

fn resolve_today(_captures: &Captures<'_>, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    Some(reference)
}

fn resolve_tomorrow(_captures: &Captures<'_>, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    reference.checked_add_signed(Duration::days(1))
}

fn resolve_day_after_tomorrow(_captures: &Captures<'_>, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    reference.checked_add_signed(Duration::days(2))
}

fn resolve_yesterday(_captures: &Captures<'_>, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    reference.checked_sub_signed(Duration::days(1))
}

fn resolve_day_before_yesterday(_captures: &Captures<'_>, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    reference.checked_sub_signed(Duration::days(2))
}
