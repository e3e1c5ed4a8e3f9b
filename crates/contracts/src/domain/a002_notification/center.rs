//! View-model центра уведомлений.
//!
//! Порядок записей не меняется: отфильтрованный список сохраняет
//! исходный порядок коллекции.

use super::aggregate::{Notification, NotificationFilter};
use crate::domain::common::{find_record, find_record_mut, remove_record};

#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
    filter: NotificationFilter,
}

impl NotificationCenter {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self {
            notifications,
            filter: NotificationFilter::All,
        }
    }

    pub fn with_filter(notifications: Vec<Notification>, filter: NotificationFilter) -> Self {
        Self {
            notifications,
            filter,
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn notification(&self, id: &str) -> Option<&Notification> {
        find_record(&self.notifications, id)
    }

    pub fn filter(&self) -> NotificationFilter {
        self.filter
    }

    /// Уведомления, прошедшие текущий фильтр
    pub fn filtered_notifications(&self) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| self.filter.matches(n))
            .collect()
    }

    /// Непрочитанные по всем разделам, независимо от фильтра
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    pub fn set_filter(&mut self, filter: NotificationFilter) {
        self.filter = filter;
    }

    pub fn mark_as_read(&mut self, id: &str) {
        if let Some(notification) = find_record_mut(&mut self.notifications, id) {
            notification.is_read = true;
        }
    }

    pub fn mark_all_as_read(&mut self) {
        for notification in &mut self.notifications {
            notification.is_read = true;
        }
    }

    pub fn delete(&mut self, id: &str) {
        remove_record(&mut self.notifications, id);
    }

    /// Действие "Открыть": помечает уведомление прочитанным и возвращает
    /// ключ таба из `action_url`. Неизвестный id ничего не меняет.
    pub fn open(&mut self, id: &str) -> Option<String> {
        let notification = find_record_mut(&mut self.notifications, id)?;
        notification.is_read = true;
        notification.action_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_notification::aggregate::{NotificationCategory, NotificationSeverity};
    use crate::domain::a002_notification::seed::seed_notifications;
    use chrono::{TimeZone, Utc};

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 27, 12, 0, 0).unwrap()
    }

    fn seeded() -> NotificationCenter {
        NotificationCenter::new(seed_notifications(now()))
    }

    fn ids(center: &NotificationCenter) -> Vec<String> {
        center
            .filtered_notifications()
            .into_iter()
            .map(|n| n.id.clone())
            .collect()
    }

    #[test]
    fn test_seed_counts() {
        let center = seeded();
        assert_eq!(center.notifications().len(), 6);
        assert_eq!(center.unread_count(), 3);
        assert_eq!(center.filter(), NotificationFilter::All);
        assert_eq!(center.filtered_notifications().len(), 6);
    }

    #[test]
    fn test_mark_all_read_then_unread_filter_empty() {
        let mut center = seeded();
        center.mark_all_as_read();
        assert_eq!(center.unread_count(), 0);
        center.set_filter(NotificationFilter::Unread);
        assert!(center.filtered_notifications().is_empty());
    }

    #[test]
    fn test_unread_filter() {
        let mut center = seeded();
        center.set_filter(NotificationFilter::Unread);
        let visible = center.filtered_notifications();
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().all(|n| !n.is_read));
    }

    #[test]
    fn test_category_filter_exact() {
        let mut center = seeded();
        for category in NotificationCategory::all() {
            center.set_filter(NotificationFilter::Category(category));
            let visible = center.filtered_notifications();
            let expected = center
                .notifications()
                .iter()
                .filter(|n| n.category == category)
                .count();
            assert_eq!(visible.len(), expected);
            assert!(visible.iter().all(|n| n.category == category));
        }
    }

    #[test]
    fn test_source_order_preserved() {
        let mut center = NotificationCenter::new(vec![
            Notification::new(
                "old",
                "t",
                "m",
                NotificationSeverity::Info,
                NotificationCategory::Sales,
                now() - chrono::Duration::days(3),
            ),
            Notification::new(
                "new",
                "t",
                "m",
                NotificationSeverity::Info,
                NotificationCategory::Sales,
                now(),
            ),
        ]);
        assert_eq!(ids(&center), vec!["old", "new"]);
        center.set_filter(NotificationFilter::Category(NotificationCategory::Sales));
        assert_eq!(ids(&center), vec!["old", "new"]);
    }

    #[test]
    fn test_mark_read_idempotent_and_noop_on_miss() {
        let mut center = seeded();
        let id = center
            .notifications()
            .iter()
            .find(|n| !n.is_read)
            .map(|n| n.id.clone())
            .unwrap();
        center.mark_as_read(&id);
        let once = center.notifications().to_vec();
        center.mark_as_read(&id);
        assert_eq!(center.notifications(), once.as_slice());
        assert_eq!(center.unread_count(), 2);

        center.mark_as_read("does-not-exist");
        assert_eq!(center.notifications(), once.as_slice());
    }

    #[test]
    fn test_delete_never_reappears() {
        let mut center = seeded();
        let id = center.notifications()[0].id.clone();
        center.delete(&id);
        assert_eq!(center.notifications().len(), 5);
        assert!(center.notification(&id).is_none());

        let after = center.notifications().to_vec();
        center.mark_as_read(&id);
        center.delete(&id);
        center.mark_all_as_read();
        assert_eq!(center.notifications().len(), after.len());
        assert!(center.notifications().iter().all(|n| n.id != id));
    }

    #[test]
    fn test_open_marks_read_and_returns_target() {
        let mut center = seeded();
        assert!(!center.notification("ntf-002").map(|n| n.is_read).unwrap());

        assert_eq!(center.open("ntf-002"), Some("a001_message".to_string()));
        assert!(center.notification("ntf-002").map(|n| n.is_read).unwrap());
        assert_eq!(center.unread_count(), 2);
    }

    #[test]
    fn test_open_without_action_still_marks_read() {
        let mut center = NotificationCenter::new(vec![Notification::new(
            "plain",
            "t",
            "m",
            NotificationSeverity::Info,
            NotificationCategory::System,
            now(),
        )]);
        assert_eq!(center.open("plain"), None);
        assert_eq!(center.unread_count(), 0);
    }

    #[test]
    fn test_open_unknown_id_is_noop() {
        let mut center = seeded();
        let before = center.notifications().to_vec();
        assert_eq!(center.open("does-not-exist"), None);
        assert_eq!(center.notifications(), before.as_slice());
    }

    #[test]
    fn test_with_filter() {
        let center = NotificationCenter::with_filter(
            seed_notifications(now()),
            NotificationFilter::Category(NotificationCategory::System),
        );
        assert!(center
            .filtered_notifications()
            .iter()
            .all(|n| n.category == NotificationCategory::System));
    }
}
