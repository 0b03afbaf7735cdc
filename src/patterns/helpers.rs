//! Calendar arithmetic shared by the pattern resolvers.
//!
//! Day-of-week numbering is Monday-first everywhere in this crate: the name
//! table below and `num_days_from_monday` agree, which is what makes the
//! weekday arithmetic a single subtraction. Weeks run Monday through Sunday.

use chrono::{Datelike, Duration, NaiveDateTime};

/// Weekday name tokens, Monday-first (월=0 … 일=6).
const WEEKDAY_NAMES: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

/// Monday-first index of a weekday token.
pub(crate) fn weekday_index(token: &str) -> Option<i64> {
    WEEKDAY_NAMES.iter().position(|name| *name == token).map(|i| i as i64)
}

/// Week offset of a week-qualifier token.
///
/// 이번 selects the current week, 저번/지난 the previous one, and a repeated
/// 다 prefix counts weeks forward: 다음 = 1, 다다음 = 2, 다다다음 = 3, …
pub(crate) fn week_offset(qualifier: &str) -> i64 {
    match qualifier {
        "이번" => 0,
        "저번" | "지난" => -1,
        _ => qualifier.matches('다').count() as i64,
    }
}

/// The instant on the requested weekday of the week `offset_weeks` away from
/// the reference's week, keeping the reference time-of-day.
///
/// With offset 0 this lands inside the current Monday-to-Sunday week even
/// when the weekday has already passed — "이번 주 금요일" asked on a Sunday
/// resolves to the Friday two days ago, not next week's.
///
/// `None` when the shift leaves the representable calendar range, which can
/// only happen for a reference injected near the range's edges.
pub(crate) fn weekday_in_week(reference: NaiveDateTime, offset_weeks: i64, target_day: i64) -> Option<NaiveDateTime> {
    let current_day = i64::from(reference.weekday().num_days_from_monday());
    let delta = Duration::try_days(offset_weeks.checked_mul(7)? + target_day - current_day)?;
    reference.checked_add_signed(delta)
}

/// Convert a meridiem token plus 12-hour clock hour to a 24-hour hour.
///
/// Hours outside 1–12 are rejected: "오후 13시" names no instant.
pub(crate) fn to_24_hour(meridiem: &str, hour: u32) -> Option<u32> {
    if !(1..=12).contains(&hour) {
        return None;
    }
    Some(match (meridiem, hour) {
        ("오후", h) if h != 12 => h + 12,
        ("오전", 12) => 0,
        (_, h) => h,
    })
}
