//! Human-friendly dates for the table's date column
//!
//! - "Just now" for the last 30 seconds
//! - "A minute ago" up to one minute
//! - relative wording ("5 minutes ago", "an hour ago", "3 hours ago") for the rest of the first day
//! - "Yesterday" for the second day
//! - a calendar date such as "Sep 19, 2024" for anything older

use crate::core::order::resolve_date;
use chrono::{DateTime, FixedOffset};

/// Format `date` relative to `now`
pub fn format_relative(date: DateTime<FixedOffset>, now: DateTime<FixedOffset>) -> String {
    let elapsed = now.signed_duration_since(date);
    let seconds = elapsed.num_seconds();

    // Future instants (clock skew between source and viewer) read as fresh.
    if seconds < 0 {
        return "Just now".to_string();
    }

    match elapsed.num_days() {
        0 => {
            if seconds < 30 {
                "Just now".to_string()
            } else if seconds < 60 {
                "A minute ago".to_string()
            } else {
                relative_phrase(seconds)
            }
        }
        1 => "Yesterday".to_string(),
        _ => date.format("%b %-d, %Y").to_string(),
    }
}

/// Resolve a raw record date and format it; malformed input reads as `now`
pub fn format_table_date(raw: &str, now: DateTime<FixedOffset>) -> String {
    format_relative(resolve_date(raw, now).unwrap_or(now), now)
}

// Thresholds follow the usual "time ago" wording: values are rounded, and a
// unit switches to the next one before it reaches its full size.
fn relative_phrase(seconds: i64) -> String {
    let minutes = (seconds as f64 / 60.0).round() as i64;
    let hours = (seconds as f64 / 3600.0).round() as i64;

    if seconds < 90 {
        "a minute ago".to_string()
    } else if minutes < 45 {
        format!("{} minutes ago", minutes)
    } else if minutes < 90 {
        "an hour ago".to_string()
    } else if hours < 22 {
        format!("{} hours ago", hours)
    } else {
        "a day ago".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-09-21T12:00:00Z").unwrap()
    }

    fn ago(d: Duration) -> String {
        format_relative(now() - d, now())
    }

    #[test]
    fn test_just_now() {
        assert_eq!(ago(Duration::seconds(15)), "Just now");
        assert_eq!(ago(Duration::seconds(0)), "Just now");
    }

    #[test]
    fn test_a_minute_ago() {
        assert_eq!(ago(Duration::seconds(45)), "A minute ago");
        assert_eq!(ago(Duration::seconds(60)), "a minute ago");
    }

    #[test]
    fn test_minutes_and_hours() {
        assert_eq!(ago(Duration::minutes(5)), "5 minutes ago");
        assert_eq!(ago(Duration::minutes(15)), "15 minutes ago");
        assert_eq!(ago(Duration::hours(1)), "an hour ago");
        assert_eq!(ago(Duration::hours(3)), "3 hours ago");
        assert_eq!(ago(Duration::hours(8)), "8 hours ago");
        assert_eq!(ago(Duration::hours(23)), "a day ago");
    }

    #[test]
    fn test_yesterday() {
        assert_eq!(ago(Duration::hours(24)), "Yesterday");
        assert_eq!(ago(Duration::hours(30)), "Yesterday");
    }

    #[test]
    fn test_calendar_date() {
        let date = DateTime::parse_from_rfc3339("2024-09-15T10:15:00Z").unwrap();
        assert_eq!(format_relative(date, now()), "Sep 15, 2024");

        // 45 hours back is still counted as one elapsed day
        let date = DateTime::parse_from_rfc3339("2024-09-19T14:30:00Z").unwrap();
        assert_eq!(format_relative(date, now()), "Yesterday");

        let date = DateTime::parse_from_rfc3339("2023-06-05T14:10:00Z").unwrap();
        assert_eq!(format_relative(date, now()), "Jun 5, 2023");
    }

    #[test]
    fn test_future_is_just_now() {
        assert_eq!(format_relative(now() + Duration::hours(2), now()), "Just now");
    }

    #[test]
    fn test_format_table_date() {
        assert_eq!(format_table_date("2024-08-15T16:45:00Z", now()), "Aug 15, 2024");
        assert_eq!(format_table_date("yesterday", now()), "Yesterday");
        assert_eq!(format_table_date("2024-09-15", now()), "Sep 15, 2024");
        assert_eq!(format_table_date("garbage", now()), "Just now");
    }
}
