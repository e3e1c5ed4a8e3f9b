//! Форматирование значений для отображения (время, размеры файлов).
//!
//! Текущее время всегда передаётся параметром, чтобы функции оставались
//! чистыми и проверяемыми.

use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Форматирует размер в байтах с шагом 1024 и одним знаком после точки
///
/// Шаг именно 1024, а не 1000: 245000 байт — это "239.3 KB".
///
/// # Примеры
/// ```
/// use contracts::shared::format::format_file_size;
/// assert_eq!(format_file_size(0), "0 B");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, SIZE_UNITS[unit])
}

/// Время сообщения в списке: сегодня — "HH:MM", вчера — "Yesterday",
/// иначе — день и месяц ("25 Sep").
///
/// Календарный день определяется в часовом поясе аргументов.
pub fn format_message_time<Tz: TimeZone>(timestamp: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    let day = timestamp.date_naive();
    let today = now.date_naive();

    if day == today {
        timestamp.format("%H:%M").to_string()
    } else if today.pred_opt() == Some(day) {
        "Yesterday".to_string()
    } else {
        timestamp.format("%d %b").to_string()
    }
}

/// Полная дата и время для карточки сообщения: "27 Sep 2024, 10:42"
pub fn format_full_datetime<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    timestamp.format("%d %b %Y, %H:%M").to_string()
}

/// Относительное время уведомления: "3 days ago", "1 hour ago", "just now"
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);

    let days = elapsed.num_days();
    if days >= 1 {
        return ago(days, "day");
    }
    let hours = elapsed.num_hours();
    if hours >= 1 {
        return ago(hours, "hour");
    }
    let minutes = elapsed.num_minutes();
    if minutes >= 1 {
        return ago(minutes, "minute");
    }
    "just now".to_string()
}

fn ago(n: i64, unit: &str) -> String {
    if n > 1 {
        format!("{} {}s ago", n, unit)
    } else {
        format!("{} {} ago", n, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn utc(month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, month, day, hour, min, 0).unwrap()
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512.0 B");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(18_432), "18.0 KB");
        assert_eq!(format_file_size(1_572_864), "1.5 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn test_format_file_size_kb_scaling() {
        // 245000 / 1024 = 239.26
        assert_eq!(format_file_size(245_000), "239.3 KB");
    }

    #[test]
    fn test_format_file_size_caps_at_gb() {
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048.0 GB");
    }

    #[test]
    fn test_message_time_same_day() {
        let now = utc(9, 27, 15, 0);
        assert_eq!(format_message_time(&utc(9, 27, 10, 42), &now), "10:42");
        assert_eq!(format_message_time(&utc(9, 27, 0, 5), &now), "00:05");
    }

    #[test]
    fn test_message_time_yesterday() {
        let now = utc(9, 27, 0, 30);
        assert_eq!(format_message_time(&utc(9, 26, 23, 59), &now), "Yesterday");
        assert_eq!(format_message_time(&utc(9, 26, 0, 1), &now), "Yesterday");
        // граница месяца
        assert_eq!(format_message_time(&utc(9, 30, 12, 0), &utc(10, 1, 8, 0)), "Yesterday");
    }

    #[test]
    fn test_message_time_older() {
        let now = utc(9, 27, 15, 0);
        assert_eq!(format_message_time(&utc(9, 25, 9, 30), &now), "25 Sep");
        assert_eq!(format_message_time(&utc(8, 3, 9, 30), &now), "03 Aug");
    }

    #[test]
    fn test_message_time_uses_local_calendar_day() {
        let msk = FixedOffset::east_opt(3 * 3600).unwrap();
        let ts = utc(9, 26, 22, 30).with_timezone(&msk);
        let now = utc(9, 27, 8, 0).with_timezone(&msk);
        assert_eq!(format_message_time(&ts, &now), "01:30");
        assert_eq!(
            format_message_time(&utc(9, 26, 22, 30), &utc(9, 27, 8, 0)),
            "Yesterday"
        );
    }

    #[test]
    fn test_format_full_datetime() {
        assert_eq!(format_full_datetime(&utc(9, 27, 10, 42)), "27 Sep 2024, 10:42");
    }

    #[test]
    fn test_relative_time() {
        let now = utc(9, 27, 12, 0);
        assert_eq!(format_relative_time(now, now), "just now");
        assert_eq!(format_relative_time(now - Duration::seconds(59), now), "just now");
        assert_eq!(format_relative_time(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(format_relative_time(now - Duration::minutes(5), now), "5 minutes ago");
        assert_eq!(format_relative_time(now - Duration::minutes(60), now), "1 hour ago");
        assert_eq!(format_relative_time(now - Duration::hours(23), now), "23 hours ago");
        assert_eq!(format_relative_time(now - Duration::hours(24), now), "1 day ago");
        assert_eq!(format_relative_time(now - Duration::days(6), now), "6 days ago");
    }

    #[test]
    fn test_relative_time_future_is_just_now() {
        let now = utc(9, 27, 12, 0);
        assert_eq!(format_relative_time(now + Duration::hours(2), now), "just now");
    }
}
