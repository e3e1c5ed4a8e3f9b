use chrono::Utc;
use contracts::domain::a002_notification::{
    seed_notifications, Notification, NotificationCenter, NotificationFilter,
};
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

/// ViewModel of the notification center, shared by the header bell,
/// the sidebar badge and the notifications page.
#[derive(Clone, Copy)]
pub struct NotificationCenterVm {
    pub state: RwSignal<NotificationCenter>,
}

impl NotificationCenterVm {
    pub fn new(config: &AppConfig) -> Self {
        let filter = NotificationFilter::from_str(&config.notifications.default_filter)
            .unwrap_or_else(|e| {
                log::warn!("{}; falling back to 'all'", e);
                NotificationFilter::All
            });
        Self {
            state: RwSignal::new(NotificationCenter::with_filter(
                seed_notifications(Utc::now()),
                filter,
            )),
        }
    }

    pub fn unread_count(&self) -> usize {
        self.state.with(|s| s.unread_count())
    }

    pub fn filter(&self) -> NotificationFilter {
        self.state.with(|s| s.filter())
    }

    pub fn filtered_notifications(&self) -> Vec<Notification> {
        self.state
            .with(|s| s.filtered_notifications().into_iter().cloned().collect())
    }

    pub fn has_notifications(&self) -> bool {
        self.state.with(|s| !s.notifications().is_empty())
    }

    pub fn set_filter(&self, filter: NotificationFilter) {
        log::debug!("notifications: filter {}", filter.as_str());
        self.state.update(|s| s.set_filter(filter));
    }

    pub fn mark_as_read(&self, id: &str) {
        log::debug!("notifications: mark_as_read {}", id);
        self.state.update(|s| s.mark_as_read(id));
    }

    pub fn mark_all_as_read(&self) {
        log::debug!("notifications: mark_all_as_read");
        self.state.update(|s| s.mark_all_as_read());
    }

    pub fn delete(&self, id: &str) {
        log::debug!("notifications: delete {}", id);
        self.state.update(|s| s.delete(id));
    }

    /// Marks the notification read and returns its action target, if any.
    pub fn open(&self, id: &str) -> Option<String> {
        log::debug!("notifications: open {}", id);
        let mut target = None;
        self.state.update(|s| target = s.open(id));
        target
    }
}
