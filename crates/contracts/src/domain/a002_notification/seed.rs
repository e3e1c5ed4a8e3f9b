//! Демо-уведомления. Время задаётся относительно `now`, чтобы относительные
//! подписи ("5 minutes ago") выглядели правдоподобно при любом запуске.

use super::aggregate::{Notification, NotificationCategory, NotificationSeverity};
use chrono::{DateTime, Duration, Utc};

pub fn seed_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification::new(
            "ntf-001",
            "Invoice INV-2024-0412 paid",
            "Customer Baltic Trade LLC paid invoice INV-2024-0412 in full (€12,450.00).",
            NotificationSeverity::Success,
            NotificationCategory::Sales,
            now - Duration::minutes(5),
        ),
        Notification::new(
            "ntf-002",
            "Purchase order awaiting approval",
            "PO-2024-131 from Office Supply Co. exceeds your approval limit and needs sign-off.",
            NotificationSeverity::Warning,
            NotificationCategory::Purchases,
            now - Duration::hours(2),
        )
        .with_action("a001_message"),
        Notification::new(
            "ntf-003",
            "Payroll run scheduled",
            "The October payroll run is scheduled for October 1 at 06:00.",
            NotificationSeverity::Info,
            NotificationCategory::Payroll,
            now - Duration::days(1),
        ),
        Notification::new(
            "ntf-004",
            "Bank feed synchronization failed",
            "The nightly import from the main operating account failed. Check the bank \
             connection settings.",
            NotificationSeverity::Error,
            NotificationCategory::System,
            now - Duration::days(3),
        )
        .read()
        .with_action("sys_settings"),
        Notification::new(
            "ntf-005",
            "Month-end close checklist",
            "September close starts on Monday. Review the checklist in the help center.",
            NotificationSeverity::Info,
            NotificationCategory::Accounting,
            now - Duration::days(5),
        )
        .read()
        .with_action("a003_help_center"),
        Notification::new(
            "ntf-006",
            "New team member added",
            "Laura Gómez joined the Finance team as Payroll Specialist.",
            NotificationSeverity::Success,
            NotificationCategory::System,
            now - Duration::days(7),
        )
        .read()
        .with_action("sys_team"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::format::format_relative_time;
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_unique() {
        let now = Utc.with_ymd_and_hms(2024, 9, 27, 12, 0, 0).unwrap();
        let items = seed_notifications(now);
        let ids: HashSet<&str> = items.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_seed_relative_labels() {
        let now = Utc.with_ymd_and_hms(2024, 9, 27, 12, 0, 0).unwrap();
        let labels: Vec<String> = seed_notifications(now)
            .iter()
            .map(|n| format_relative_time(n.created_at, now))
            .collect();
        assert_eq!(
            labels,
            vec![
                "5 minutes ago",
                "2 hours ago",
                "1 day ago",
                "3 days ago",
                "5 days ago",
                "7 days ago"
            ]
        );
    }
}
