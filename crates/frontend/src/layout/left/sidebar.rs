//! Sidebar component with collapsible menu groups

use crate::domain::a001_message::ui::inbox::InboxVm;
use crate::domain::a002_notification::ui::center::NotificationCenterVm;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::tabs::tab_labels::{
    TAB_HELP_CENTER, TAB_MESSAGES, TAB_NOTIFICATIONS, TAB_SETTINGS, TAB_TEAM,
};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "workspace",
            label: "Workspace",
            icon: "layers",
            items: vec![
                (TAB_MESSAGES, tab_label_for_key(TAB_MESSAGES), "mail"),
                (TAB_NOTIFICATIONS, tab_label_for_key(TAB_NOTIFICATIONS), "bell"),
            ],
        },
        MenuGroup {
            id: "company",
            label: "Company",
            icon: "building",
            items: vec![
                (TAB_TEAM, tab_label_for_key(TAB_TEAM), "users"),
                (TAB_SETTINGS, tab_label_for_key(TAB_SETTINGS), "settings"),
            ],
        },
        MenuGroup {
            id: "support",
            label: "Support",
            icon: "help-circle",
            items: vec![(TAB_HELP_CENTER, tab_label_for_key(TAB_HELP_CENTER), "help-circle")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let inbox = use_context::<InboxVm>().expect("InboxVm not found");
    let notifications =
        use_context::<NotificationCenterVm>().expect("NotificationCenterVm not found");

    // Счётчик непрочитанных для пункта меню (0 — бейдж не показывается)
    let unread_for = move |item_id: &'static str| -> usize {
        match item_id {
            TAB_MESSAGES => inbox.unread_count(),
            TAB_NOTIFICATIONS => notifications.unread_count(),
            _ => 0,
        }
    };

    let groups = get_menu_groups();
    let expanded_groups = RwSignal::new(groups.iter().map(|g| g.id.to_string()).collect::<Vec<_>>());

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_click = group_id.clone();
                let group_id_for_exp = group_id.clone();
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        // Parent item
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        // Children
                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(id)
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(id, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                            {move || {
                                                let count = unread_for(id);
                                                (count > 0).then(|| view! {
                                                    <span class="app-sidebar__badge">{count}</span>
                                                })
                                            }}
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
