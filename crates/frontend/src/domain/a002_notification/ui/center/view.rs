use super::view_model::NotificationCenterVm;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::relative_time;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_notification::{Notification, NotificationFilter};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn NotificationCenterPage() -> impl IntoView {
    let vm = use_context::<NotificationCenterVm>().expect("NotificationCenterVm not found");

    view! {
        <PageFrame page_id="a002_notification--center" category=PAGE_CAT_LIST class="notifications">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Notifications"</h1>
                    {move || {
                        let unread = vm.unread_count();
                        (unread > 0).then(|| view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>
                                {format!("{} unread", unread)}
                            </Badge>
                        })
                    }}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.mark_all_as_read()
                        disabled=Signal::derive(move || vm.unread_count() == 0)
                    >
                        {icon("check")}
                        " Mark all as read"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="notifications__filters">
                    {NotificationFilter::options().into_iter().map(|filter| {
                        view! {
                            <button
                                class="chip"
                                class:chip--active=move || vm.filter() == filter
                                on:click=move |_| vm.set_filter(filter)
                            >
                                {filter.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <Show
                    when=move || !vm.filtered_notifications().is_empty()
                    fallback=move || view! {
                        <div class="notifications__empty">
                            {icon("bell")}
                            <span>
                                {move || if vm.has_notifications() {
                                    "No notifications match this filter"
                                } else {
                                    "You're all caught up"
                                }}
                            </span>
                        </div>
                    }
                >
                    <div class="notifications__list">
                        <For
                            each=move || vm.filtered_notifications()
                            key=|n| (n.id.clone(), n.is_read)
                            children=move |notification| view! { <NotificationCard notification=notification /> }
                        />
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[component]
fn NotificationCard(notification: Notification) -> impl IntoView {
    let vm = use_context::<NotificationCenterVm>().expect("NotificationCenterVm not found");
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let id = StoredValue::new(notification.id.clone());
    let style = notification.severity.style();
    let is_unread = !notification.is_read;
    let has_action = notification.action_url.is_some();

    let open_action = move |_| {
        if let Some(target) = id.with_value(|id| vm.open(id)) {
            ctx.open_tab_by_key(&target);
        }
    };

    view! {
        <div
            class="notification-card"
            class:notification-card--unread=is_unread
            data-severity=notification.severity.as_str()
        >
            <div class="notification-card__icon" style:color=style.color>
                {icon(style.icon)}
            </div>
            <div class="notification-card__main">
                <div class="notification-card__top">
                    <span class="notification-card__title">{notification.title.clone()}</span>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>
                        {notification.category.label()}
                    </Badge>
                    <span class="notification-card__time">{relative_time(&notification.created_at)}</span>
                </div>
                <div class="notification-card__message">{notification.message.clone()}</div>
                <Flex class="notification-card__actions">
                    {has_action.then(|| view! {
                        <Button appearance=ButtonAppearance::Primary size=ButtonSize::Small on_click=open_action>
                            {icon("external-link")}
                            " Open"
                        </Button>
                    })}
                    {is_unread.then(|| view! {
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| id.with_value(|id| vm.mark_as_read(id))
                        >
                            {icon("check")}
                            " Mark as read"
                        </Button>
                    })}
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| id.with_value(|id| vm.delete(id))
                    >
                        {icon("trash")}
                        " Delete"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
