use super::NotImplemented;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;

#[component]
pub fn TeamPage() -> impl IntoView {
    view! {
        <PageFrame page_id="sys_team--system" category=PAGE_CAT_SYSTEM>
            <NotImplemented title="Team" icon_name="users" />
        </PageFrame>
    }
}
