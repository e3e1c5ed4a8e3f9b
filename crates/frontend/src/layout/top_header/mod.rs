//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Sidebar toggle
//! - Application title
//! - Notification bell with unread counter
//! - Settings shortcut and theme selector

use crate::domain::a002_notification::ui::center::NotificationCenterVm;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{TAB_NOTIFICATIONS, TAB_SETTINGS};
use crate::shared::config::use_app_config;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeSelector;
use leptos::prelude::*;

/// TopHeader component - main application top bar.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notifications = leptos::context::use_context::<NotificationCenterVm>()
        .expect("NotificationCenterVm not found");
    let title = use_app_config().ui.title;

    let is_sidebar_visible = move || ctx.left_open.get();
    let unread = move || notifications.unread_count();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">{title}</span>
            </div>

            <div class="top-header__actions">
                // Notifications
                <button
                    class="top-header__icon-btn top-header__bell"
                    title="Notifications"
                    on:click=move |_| ctx.open_tab_by_key(TAB_NOTIFICATIONS)
                >
                    {icon("bell")}
                    {move || {
                        let count = unread();
                        (count > 0).then(|| view! {
                            <span class="top-header__badge">{count}</span>
                        })
                    }}
                </button>

                // Settings
                <button
                    class="top-header__icon-btn"
                    title="Settings"
                    on:click=move |_| ctx.open_tab_by_key(TAB_SETTINGS)
                >
                    {icon("settings")}
                </button>

                <ThemeSelector />
            </div>
        </div>
    }
}
