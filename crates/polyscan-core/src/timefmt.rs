//! Millisecond timestamp rendering.

use chrono::{DateTime, Local, LocalResult, TimeZone};
use std::fmt;

/// Outcome of parsing a millisecond timestamp for display.
///
/// An explicit two-arm parse-or-fallback: either the text is an integer
/// millisecond count that converts to a local calendar time, or the
/// original text is kept and echoed unchanged. The fallback arm is not an
/// error; an unparseable timestamp never fails the record it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum TimestampDisplay {
    Calendar(DateTime<Local>),
    Raw(String),
}

impl TimestampDisplay {
    /// Parse text expected to hold milliseconds since the Unix epoch.
    pub fn from_millis_text(text: &str) -> Self {
        match text.trim().parse::<i64>() {
            Ok(millis) => match Local.timestamp_millis_opt(millis) {
                LocalResult::Single(dt) => Self::Calendar(dt),
                // Out-of-range counts fall back to the raw text too.
                _ => Self::Raw(text.to_string()),
            },
            Err(_) => Self::Raw(text.to_string()),
        }
    }
}

impl fmt::Display for TimestampDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calendar(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            Self::Raw(text) => f.write_str(text),
        }
    }
}
