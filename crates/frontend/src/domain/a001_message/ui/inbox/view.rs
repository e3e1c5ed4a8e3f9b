use super::message_detail::MessageDetail;
use super::view_model::InboxVm;
use crate::shared::date_utils::message_time;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_message::{Message, MessageCategory};
use leptos::prelude::*;
use thaw::*;

const PREVIEW_CHARS: usize = 90;

#[component]
pub fn MessageInbox() -> impl IntoView {
    let vm = use_context::<InboxVm>().expect("InboxVm not found");

    let search = Signal::derive(move || vm.search());

    view! {
        <PageFrame page_id="a001_message--inbox" category=PAGE_CAT_LIST class="inbox">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Messages"</h1>
                    {move || {
                        let unread = vm.unread_count();
                        (unread > 0).then(|| view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                {format!("{} unread", unread)}
                            </Badge>
                        })
                    }}
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |query: String| vm.set_search(query))
                        placeholder="Search messages..."
                    />
                </div>
            </div>

            <div class="page__content inbox__body">
                <div class="inbox__folders">
                    {MessageCategory::all().into_iter().map(|category| {
                        view! {
                            <button
                                class="inbox__folder"
                                class:inbox__folder--active=move || vm.selected_category() == category
                                on:click=move |_| vm.select_category(category)
                            >
                                {icon(category.icon())}
                                <span class="inbox__folder-label">{category.label()}</span>
                                <span class="inbox__folder-count">{move || vm.category_count(category)}</span>
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="inbox__list">
                    <Show
                        when=move || !vm.filtered_messages().is_empty()
                        fallback=move || view! {
                            <div class="inbox__empty">
                                {icon("mail-open")}
                                <span>"No messages"</span>
                            </div>
                        }
                    >
                        <For
                            each=move || vm.filtered_messages()
                            // Флаги входят в ключ, чтобы строка перерисовалась после изменения
                            key=|m| (m.id.clone(), m.is_read, m.is_important)
                            children=move |message| view! { <MessageRow message=message search=search /> }
                        />
                    </Show>
                </div>

                <div class="inbox__detail">
                    <MessageDetail />
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn MessageRow(message: Message, search: Signal<String>) -> impl IntoView {
    let vm = use_context::<InboxVm>().expect("InboxVm not found");

    let id = StoredValue::new(message.id.clone());
    let is_selected = move || id.with_value(|id| vm.selected_id().as_deref() == Some(id.as_str()));
    let subject = message.subject.clone();
    let preview = message.preview(PREVIEW_CHARS);
    let is_unread = !message.is_read;
    let star_title = if message.is_important { "Unmark important" } else { "Mark important" };

    view! {
        <div
            class="inbox__row"
            class:inbox__row--unread=is_unread
            class:inbox__row--selected=is_selected
            on:click=move |_| id.with_value(|id| vm.select_message(id))
        >
            <div class="inbox__avatar" title=message.sender.email.clone()>
                {message.sender.initials()}
            </div>
            <div class="inbox__row-main">
                <div class="inbox__row-top">
                    <span class="inbox__sender">{message.sender.name.clone()}</span>
                    <span class="inbox__time">{message_time(&message.created_at)}</span>
                </div>
                <div class="inbox__subject">
                    {move || highlight_matches(&subject, &search.get())}
                </div>
                <div class="inbox__preview">{preview}</div>
            </div>
            <div class="inbox__row-flags">
                <button
                    class="inbox__star"
                    class:inbox__star--on=message.is_important
                    title=star_title
                    on:click=move |ev| {
                        ev.stop_propagation();
                        id.with_value(|id| vm.toggle_important(id));
                    }
                >
                    {icon("star")}
                </button>
                {message.has_attachments().then(|| view! {
                    <span class="inbox__clip" title="Has attachments">{icon("paperclip")}</span>
                })}
            </div>
        </div>
    }
}
