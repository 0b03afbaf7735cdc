//! The dispatcher.
//!
//! Parsing an input phrase is a single ordered scan:
//!
//! ```text
//! patterns::table ──┐
//!                   │
//! input ────────────┼─ first matcher that fires wins
//!                   │
//!                   v
//!            (pattern.resolve)(captures, reference)
//!                   │
//!                   v
//!            Option<NaiveDateTime>
//! ```
//!
//! There is no saturation, no backtracking and no best-match scoring: the
//! patterns carry distinct literal anchors, so at most one is expected to
//! match a given phrase, and table order decides ties for anything added
//! later. Keep new, more specific patterns *above* anything that could
//! shadow them.
//!
//! A structural match is final even when its resolver returns `None`
//! (calendar-invalid values): later patterns are not consulted, because the
//! phrase was recognized — it just names an impossible instant.

use chrono::NaiveDateTime;

use crate::DatePattern;

/// Scan `table` in order and resolve `text` against the first pattern whose
/// matcher fires. `None` when nothing matches or when the matched expression
/// is calendar-invalid.
pub(crate) fn resolve(text: &str, reference: NaiveDateTime, table: &[DatePattern]) -> Option<NaiveDateTime> {
    for pattern in table {
        if let Some(captures) = pattern.matcher.captures(text) {
            return (pattern.resolve)(&captures, reference);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::patterns;

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 10, 20).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn first_match_wins_over_later_table_entries() {
        // "오늘" sits above "어제" in the table, so a phrase containing both
        // resolves as today.
        let table = patterns::table();
        let resolved = resolve("오늘 어제", reference(), &table).unwrap();
        assert_eq!(resolved, reference());
    }

    #[test]
    fn no_match_yields_none() {
        let table = patterns::table();
        assert_eq!(resolve("잘못된 날짜", reference(), &table), None);
    }

    #[test]
    fn matched_but_invalid_does_not_fall_through() {
        // Structurally a calendar date, but month 13 does not exist. The
        // dispatcher must report absence rather than try later patterns
        // (the day-offset matcher would otherwise see "1일" here).
        let table = patterns::table();
        assert_eq!(resolve("2024년 13월 1일 후", reference(), &table), None);
    }
}
