use super::view_model::InboxVm;
use crate::shared::date_utils::message_datetime;
use crate::shared::icons::icon;
use contracts::domain::a001_message::{Message, MessageCategory};
use contracts::shared::format::format_file_size;
use leptos::prelude::*;
use thaw::*;

/// Reading pane: the selected message or a placeholder.
#[component]
pub fn MessageDetail() -> impl IntoView {
    let vm = use_context::<InboxVm>().expect("InboxVm not found");

    move || match vm.selected_message() {
        Some(message) => view! { <MessageBody message=message /> }.into_any(),
        None => view! {
            <div class="inbox__detail-empty">
                {icon("mail")}
                <span>"Select a message to read"</span>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn MessageBody(message: Message) -> impl IntoView {
    let vm = use_context::<InboxVm>().expect("InboxVm not found");
    let id = StoredValue::new(message.id.clone());
    let is_archived = message.category == MessageCategory::Archive;
    let is_unread = !message.is_read;
    let important_label = if message.is_important { " Unmark important" } else { " Mark important" };

    view! {
        <article class="message">
            <header class="message__header">
                <h2 class="message__subject">
                    {message.is_important.then(|| view! {
                        <span class="message__important">{icon("star")}</span>
                    })}
                    {message.subject.clone()}
                </h2>
                <div class="message__meta">
                    <div class="inbox__avatar">{message.sender.initials()}</div>
                    <div>
                        <div class="message__sender">{message.sender.name.clone()}</div>
                        <div class="message__email">{message.sender.email.clone()}</div>
                    </div>
                    <div class="message__date">{message_datetime(&message.created_at)}</div>
                </div>
            </header>

            <Flex class="message__actions">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| id.with_value(|id| vm.toggle_important(id))
                >
                    {icon("star")}
                    {important_label}
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| id.with_value(|id| vm.mark_as_unread(id))
                    disabled=is_unread
                >
                    {icon("mail")}
                    " Mark unread"
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| id.with_value(|id| vm.archive(id))
                    disabled=is_archived
                >
                    {icon("archive")}
                    " Archive"
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| id.with_value(|id| vm.delete(id))
                >
                    {icon("trash")}
                    " Delete"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| vm.clear_selection()>
                    {icon("x")}
                    " Close"
                </Button>
            </Flex>

            <div class="message__body">
                {message
                    .body
                    .lines()
                    .map(|line| view! { <p>{line.to_string()}</p> })
                    .collect_view()}
            </div>

            {(!message.attachments.is_empty()).then(|| view! {
                <section class="message__attachments">
                    <h3>{format!("Attachments ({})", message.attachments.len())}</h3>
                    {message.attachments.iter().map(|a| view! {
                        <div class="message__attachment" title=a.mime_type.clone()>
                            {icon("paperclip")}
                            <span class="message__attachment-name">{a.name.clone()}</span>
                            <span class="message__attachment-size">{format_file_size(a.size)}</span>
                        </div>
                    }).collect_view()}
                </section>
            })}
        </article>
    }
}
