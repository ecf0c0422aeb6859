//! Timestamp formatting for the card's date line.

use std::fmt::Write;

use chrono::DateTime;

use crate::models::DateFormatSettings;

/// Pattern used when a simple or custom format has none.
pub const DEFAULT_DATE_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

const LAST_UPDATE_PREFIX: &str = "Last update ";

const SECOND: i64 = 1;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Largest unit first.
const UNITS: [(i64, &str); 7] = [
    (YEAR, "year"),
    (MONTH, "month"),
    (WEEK, "week"),
    (DAY, "day"),
    (HOUR, "hour"),
    (MINUTE, "minute"),
    (SECOND, "second"),
];

/// Formats sample timestamps according to [`DateFormatSettings`].
#[derive(Debug, Clone)]
pub struct DateFormatProcessor {
    settings: DateFormatSettings,
}

impl DateFormatProcessor {
    pub fn new(settings: &DateFormatSettings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }

    /// Format `ts` (epoch millis). `now` is only read for relative formats.
    pub fn format(&self, ts: i64, now: i64) -> String {
        if self.settings.last_update_ago {
            let ago = time_ago(ts, now);
            if self.settings.hide_last_update_prefix {
                ago
            } else {
                format!("{}{}", LAST_UPDATE_PREFIX, ago)
            }
        } else {
            let pattern = self
                .settings
                .format
                .as_deref()
                .filter(|p| !p.is_empty())
                .unwrap_or(DEFAULT_DATE_PATTERN);
            format_timestamp(ts, pattern).unwrap_or_default()
        }
    }
}

/// Format `ts` (epoch millis, UTC) with a strftime pattern.
///
/// Returns `None` when the timestamp is out of range or the pattern is invalid.
pub fn format_timestamp(ts: i64, pattern: &str) -> Option<String> {
    let dt = DateTime::from_timestamp_millis(ts)?;
    let mut out = String::new();
    write!(out, "{}", dt.format(pattern)).ok()?;
    Some(out)
}

/// Human-readable distance between `ts` and `now`, e.g. `3 minutes ago`.
///
/// Timestamps in the future count as zero elapsed time.
pub fn time_ago(ts: i64, now: i64) -> String {
    let seconds = now.saturating_sub(ts).max(0) / 1000;
    if seconds < 30 {
        return "just now".to_string();
    }
    for (size, name) in UNITS {
        let count = seconds / size;
        if count >= 1 {
            let plural = if count == 1 { "" } else { "s" };
            return format!("{} {}{} ago", count, name, plural);
        }
    }
    "just now".to_string()
}
