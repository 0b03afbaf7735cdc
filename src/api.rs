use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;

use crate::engine;
use crate::{DatePattern, patterns};

static DEFAULT_PATTERNS: Lazy<Vec<DatePattern>> = Lazy::new(patterns::table);

/// Parsing context.
///
/// This holds the environment needed to resolve relative expressions (like
/// "내일"): the reference instant standing in for "now". Inject a fixed
/// instant for deterministic parsing.
#[derive(Debug, Clone)]
pub struct Context {
    /// Reference datetime used to resolve relative expressions.
    pub reference_time: NaiveDateTime,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            let date = NaiveDate::from_ymd_opt(2024, 10, 20).unwrap();
            let time = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
            Self { reference_time: NaiveDateTime::new(date, time) }
        } else {
            Self { reference_time: Local::now().naive_local() }
        }
    }
}

/// Parse `text` using the default pattern table and a default [`Context`]
/// (the system clock).
///
/// # Example
/// ```
/// use haru::parse;
///
/// assert!(parse("내일").is_some());
/// assert!(parse("잘못된 날짜").is_none());
/// ```
pub fn parse(text: &str) -> Option<NaiveDateTime> {
    parse_with(text, &Context::default())
}

/// Parse `text` against the ordered pattern table, resolving relative
/// expressions from `context.reference_time`.
///
/// Returns `None` when no pattern matches the input, and also when a pattern
/// matches but names a calendar value that does not exist (month 13, day 35,
/// hour 13 with a meridiem, minute 60). Absence is the normal outcome for
/// unrecognized text, not a fault.
///
/// Relative date expressions keep the reference time-of-day; absolute dates
/// resolve to midnight; clock-time expressions stay on the reference date
/// with seconds zeroed.
pub fn parse_with(text: &str, context: &Context) -> Option<NaiveDateTime> {
    engine::resolve(text, context.reference_time, &DEFAULT_PATTERNS)
}
