//! Week-qualifier + weekday expressions: "이번 주 금요일", "다다음 주 목요일".

use chrono::NaiveDateTime;
use regex::Captures;

use crate::DatePattern;
use crate::patterns::helpers::{week_offset, weekday_in_week, weekday_index};

/// "{이번,저번,지난,다(+)음} 주 X요일", whitespace around 주 optional.
///
/// The 다 prefix repeats: 다음 주 is one week out, 다다음 주 two, and so on.
pub fn pattern_week_weekday() -> DatePattern {
    date_pattern! {
        name: "{이번,저번,지난,다음+} 주 X요일",
        matcher: r"((?:다)+음|이번|저번|지난)\s*주\s*([월화수목금토일])요일",
        resolve: resolve_week_weekday,
    }
}

/// Land on the requested weekday of the qualified week. The week-offset
/// arithmetic is one subtraction over Monday-first indexes; with 이번 the
/// result stays inside the current week even when the weekday already
/// passed.
fn resolve_week_weekday(captures: &Captures<'_>, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    let offset_weeks = week_offset(captures.get(1)?.as_str());
    let target_day = weekday_index(captures.get(2)?.as_str())?;

    weekday_in_week(reference, offset_weeks, target_day)
}
