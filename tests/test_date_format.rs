//! Date line formatting.

use aggregated_value_card::date_format::{time_ago, DEFAULT_DATE_PATTERN};
use aggregated_value_card::{
    custom_date_format, last_update_ago_date_format, simple_date_format, DateFormatProcessor,
    DateFormatSettings,
};

const MINUTE: i64 = 60_000;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

#[test]
fn time_ago_picks_largest_unit() {
    let now = 1_700_000_000_000;
    assert_eq!(time_ago(now - 5_000, now), "just now");
    assert_eq!(time_ago(now - 45_000, now), "45 seconds ago");
    assert_eq!(time_ago(now - MINUTE, now), "1 minute ago");
    assert_eq!(time_ago(now - 3 * HOUR - 10 * MINUTE, now), "3 hours ago");
    assert_eq!(time_ago(now - 2 * DAY, now), "2 days ago");
    assert_eq!(time_ago(now - 14 * DAY, now), "2 weeks ago");
    assert_eq!(time_ago(now - 60 * DAY, now), "2 months ago");
    assert_eq!(time_ago(now - 400 * DAY, now), "1 year ago");
}

#[test]
fn future_timestamps_are_just_now() {
    assert_eq!(time_ago(10 * MINUTE, 0), "just now");
}

#[test]
fn last_update_ago_adds_prefix() {
    let processor = DateFormatProcessor::new(&last_update_ago_date_format());
    assert_eq!(processor.format(0, 5 * MINUTE), "Last update 5 minutes ago");
}

#[test]
fn prefix_can_be_hidden() {
    let settings = DateFormatSettings {
        hide_last_update_prefix: true,
        ..last_update_ago_date_format()
    };
    let processor = DateFormatProcessor::new(&settings);
    assert_eq!(processor.format(0, 5 * MINUTE), "5 minutes ago");
}

#[test]
fn simple_format_uses_pattern_in_utc() {
    let processor = DateFormatProcessor::new(&simple_date_format("%Y-%m-%d %H:%M"));
    assert_eq!(processor.format(1_700_000_000_000, 0), "2023-11-14 22:13");
}

#[test]
fn custom_format_uses_pattern() {
    let processor = DateFormatProcessor::new(&custom_date_format("%d/%m/%Y"));
    assert_eq!(processor.format(0, 0), "01/01/1970");
}

#[test]
fn missing_pattern_uses_default() {
    let settings = DateFormatSettings::default();
    assert!(settings.format.is_none());
    let processor = DateFormatProcessor::new(&settings);
    assert_eq!(DEFAULT_DATE_PATTERN, "%Y-%m-%d %H:%M:%S");
    assert_eq!(processor.format(0, 0), "1970-01-01 00:00:00");
}

#[test]
fn out_of_range_timestamp_is_empty() {
    let processor = DateFormatProcessor::new(&simple_date_format("%Y"));
    assert_eq!(processor.format(i64::MAX, 0), "");
}
