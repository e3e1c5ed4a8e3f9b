pub mod settings;
pub mod team;

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Notice for sections that exist in navigation but have no content yet.
#[component]
fn NotImplemented(title: &'static str, icon_name: &'static str) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
            </div>
        </div>
        <div class="page__content placeholder">
            {icon(icon_name)}
            <p>"This section is not yet implemented."</p>
        </div>
    }
}
