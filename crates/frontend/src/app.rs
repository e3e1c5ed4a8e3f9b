use crate::domain::a001_message::ui::inbox::InboxVm;
use crate::domain::a002_notification::ui::center::NotificationCenterVm;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeProvider;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Page view-models live for the whole session: header, sidebar and
    // pages read the same instance.
    provide_context(InboxVm::new(&config));
    provide_context(NotificationCenterVm::new(&config));

    provide_context(config);

    view! {
        <ThemeProvider>
            <AppRoutes />
        </ThemeProvider>
    }
}
