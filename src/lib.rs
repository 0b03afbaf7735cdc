extern crate self as haru;

use chrono::NaiveDateTime;
use regex::{Captures, Regex};

#[macro_use]
mod macros;
mod api;
mod engine;
mod patterns;

pub use api::{Context, parse, parse_with};

// --- Internal types ---------------------------------------------------------

/// Resolver function for a matched pattern.
///
/// Receives the captured groups and the reference instant, and produces a
/// fresh timestamp. `None` means the matched text names a calendar value that
/// does not exist (month 13, day 35, hour 13 with a meridiem); see
/// [`parse_with`] for the contract.
pub(crate) type Resolver = fn(&Captures<'_>, NaiveDateTime) -> Option<NaiveDateTime>;

/// A recognized expression form: a structural matcher paired with its
/// resolution rule.
///
/// Entries are built once at process start (see `patterns::table`) and are
/// immutable afterwards. The table they live in is ordered, and that order is
/// a correctness contract: the dispatcher stops at the first matcher that
/// fires, so an entry placed before a more specific one shadows it.
pub(crate) struct DatePattern {
    pub name: &'static str,
    /// Compiled once into a static via the `regex!` macro. Matches anywhere
    /// in the input (substring search, not anchored).
    pub matcher: &'static Regex,
    /// Pure function from captures + reference time to a timestamp.
    pub resolve: Resolver,
}

impl std::fmt::Debug for DatePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatePattern")
            .field("name", &self.name)
            .field("matcher", &self.matcher.as_str())
            .field("resolve", &"<function>")
            .finish()
    }
}
