//! 12-hour clock times: "오후 3시 30분", "오전 12시".

use chrono::NaiveDateTime;
use regex::Captures;

use crate::DatePattern;
use crate::patterns::helpers::to_24_hour;

/// "오전/오후 H시 [M분]", minute optional.
pub fn pattern_meridiem_time() -> DatePattern {
    date_pattern! {
        name: "오전/오후 H시 M분",
        matcher: r"(오전|오후)\s*(\d{1,2})\s*시(?:\s*(\d{1,2})\s*분)?",
        resolve: resolve_meridiem_time,
    }
}

/// The result stays on the reference calendar date with seconds zeroed, even
/// when the named time already passed. 오후 12시 is noon and 오전 12시 is
/// midnight; hours outside 1–12 and minutes past 59 resolve to absence.
fn resolve_meridiem_time(captures: &Captures<'_>, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    let meridiem = captures.get(1)?.as_str();
    let hour: u32 = captures.get(2)?.as_str().parse().ok()?;
    let minute: u32 = match captures.get(3) {
        Some(group) => group.as_str().parse().ok()?,
        None => 0,
    };

    let hour = to_24_hour(meridiem, hour)?;
    reference.date().and_hms_opt(hour, minute, 0)
}
