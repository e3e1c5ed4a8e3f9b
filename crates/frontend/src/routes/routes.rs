use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::shared::config::use_app_config;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let config = use_app_config();

    // Initialize router integration. This runs once when the component is created.
    tabs_store.init_router_integration(&config.ui.start_tab);

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

/// Корневой маршрут. Аутентификации нет: сразу показываем основной layout.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
