//! The recognized expression forms and their resolution rules.
//!
//! Each submodule contributes one family of [`DatePattern`] constructors:
//!
//! - `absolute.rs`: calendar dates ("2023년 12월 25일")
//! - `instants.rs`: named day instants (오늘, 내일, 모레, 어제, 그제)
//! - `offsets.rs`: numeric day/week offsets ("17일 후", "2주 전")
//! - `weekdays.rs`: week-qualifier + weekday ("다음 주 월요일")
//! - `time_of_day.rs`: 12-hour clock times ("오후 3시 30분")
//! - `helpers.rs`: the shared calendar arithmetic the resolvers lean on
//!
//! [`table`] assembles them into the ordered table the dispatcher scans.
//! The order below is a contract, not an iteration accident: the absolute
//! date form must precede the numeric offsets (its day token would otherwise
//! be eaten by the `N일` matcher in phrases like "2024년 10월 1일 후에 보자"),
//! and anything added later must be placed above any entry that could shadow
//! it.

use crate::DatePattern;

#[path = "patterns/absolute.rs"]
mod absolute;
#[path = "patterns/helpers.rs"]
pub(crate) mod helpers;
#[path = "patterns/instants.rs"]
mod instants;
#[path = "patterns/offsets.rs"]
mod offsets;
#[path = "patterns/time_of_day.rs"]
mod time_of_day;
#[path = "patterns/weekdays.rs"]
mod weekdays;

#[cfg(test)]
#[path = "patterns/tests.rs"]
mod tests;

/// Build the pattern table in priority order.
pub(crate) fn table() -> Vec<DatePattern> {
    vec![
        absolute::pattern_absolute_date(),
        instants::pattern_today(),
        instants::pattern_tomorrow(),
        instants::pattern_day_after_tomorrow(),
        instants::pattern_yesterday(),
        instants::pattern_day_before_yesterday(),
        offsets::pattern_day_offset(),
        offsets::pattern_week_offset(),
        weekdays::pattern_week_weekday(),
        time_of_day::pattern_meridiem_time(),
    ]
}
