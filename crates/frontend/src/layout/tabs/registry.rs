//! Tab content registry - единственный источник правды для маппинга tab.key → View

use super::tab_labels::{TAB_HELP_CENTER, TAB_MESSAGES, TAB_NOTIFICATIONS, TAB_SETTINGS, TAB_TEAM};
use crate::domain::a001_message::ui::inbox::MessageInbox;
use crate::domain::a002_notification::ui::center::NotificationCenterPage;
use crate::domain::a003_help_article::ui::list::HelpCenter;
use crate::system::pages::settings::SettingsPage;
use crate::system::pages::team::TeamPage;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// # Arguments
/// * `key` - уникальный ключ таба (например "a001_message", "sys_settings")
///
/// # Returns
/// AnyView с содержимым таба или placeholder для неизвестных ключей
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Domain
        // ═══════════════════════════════════════════════════════════════════
        TAB_MESSAGES => view! { <MessageInbox /> }.into_any(),
        TAB_NOTIFICATIONS => view! { <NotificationCenterPage /> }.into_any(),
        TAB_HELP_CENTER => view! { <HelpCenter /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // System
        // ═══════════════════════════════════════════════════════════════════
        TAB_SETTINGS => view! { <SettingsPage /> }.into_any(),
        TAB_TEAM => view! { <TeamPage /> }.into_any(),

        _ => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
