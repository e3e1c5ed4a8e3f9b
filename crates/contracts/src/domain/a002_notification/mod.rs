//! a002: центр уведомлений

pub mod aggregate;
pub mod center;
pub mod seed;

pub use aggregate::{
    Notification, NotificationCategory, NotificationFilter, NotificationSeverity, SeverityStyle,
};
pub use center::NotificationCenter;
pub use seed::seed_notifications;
