/// Utilities for date and time formatting
///
/// Thin wrappers over `contracts::shared::format` that supply the current
/// time and the browser's local timezone.
use chrono::{DateTime, Local, Utc};
use contracts::shared::format;

/// List timestamp for a message: "HH:MM", "Yesterday" or "25 Sep"
pub fn message_time(timestamp: &DateTime<Utc>) -> String {
    format::format_message_time(&timestamp.with_timezone(&Local), &Local::now())
}

/// Full timestamp for the message reading pane: "27 Sep 2024, 10:42"
pub fn message_datetime(timestamp: &DateTime<Utc>) -> String {
    format::format_full_datetime(&timestamp.with_timezone(&Local))
}

/// Relative age of a notification: "2 hours ago"
pub fn relative_time(timestamp: &DateTime<Utc>) -> String {
    format::format_relative_time(*timestamp, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_relative_time_uses_current_clock() {
        let ts = Utc::now() - Duration::hours(3) - Duration::minutes(5);
        assert_eq!(relative_time(&ts), "3 hours ago");
    }

    #[test]
    fn test_message_time_for_old_message_shows_day_and_month() {
        let ts = Utc::now() - Duration::days(40);
        let expected = ts.with_timezone(&Local).format("%d %b").to_string();
        assert_eq!(message_time(&ts), expected);
    }
}
