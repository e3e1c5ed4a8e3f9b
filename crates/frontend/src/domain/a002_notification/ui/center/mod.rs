//! Notification center UI Module

mod view;
mod view_model;

pub use view::NotificationCenterPage;
pub use view_model::NotificationCenterVm;
