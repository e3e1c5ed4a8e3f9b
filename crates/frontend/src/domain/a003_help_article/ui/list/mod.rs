//! Help center: FAQ with topic filter, search and collapsible answers

use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_help_article::{filter_articles, seed_articles, HelpArticle, HelpTopic};
use leptos::prelude::*;
use std::collections::HashSet;

#[component]
pub fn HelpCenter() -> impl IntoView {
    let articles = StoredValue::new(seed_articles());
    let topic = RwSignal::new(None::<HelpTopic>);
    let query = RwSignal::new(String::new());
    let expanded = RwSignal::new(HashSet::<String>::new());

    let visible = move || -> Vec<HelpArticle> {
        let topic = topic.get();
        let query = query.get();
        articles.with_value(|all| {
            filter_articles(all, topic, &query)
                .into_iter()
                .cloned()
                .collect()
        })
    };

    let toggle = move |id: String| {
        expanded.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        });
    };

    let topic_chip = move |value: Option<HelpTopic>, label: &'static str| {
        view! {
            <button
                class="chip"
                class:chip--active=move || topic.get() == value
                on:click=move |_| topic.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <PageFrame page_id="a003_help_article--list" category=PAGE_CAT_LIST class="help-center">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Help Center"</h1>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || query.get())
                        on_change=Callback::new(move |q: String| query.set(q))
                        placeholder="Search help articles..."
                    />
                </div>
            </div>

            <div class="page__content">
                <div class="help-center__topics">
                    {topic_chip(None, "All topics")}
                    {HelpTopic::all()
                        .into_iter()
                        .map(|t| topic_chip(Some(t), t.label()))
                        .collect_view()}
                </div>

                <Show
                    when=move || !visible().is_empty()
                    fallback=|| view! {
                        <div class="help-center__empty">
                            {icon("help-circle")}
                            <span>"No articles found"</span>
                        </div>
                    }
                >
                    <div class="help-center__list">
                        <For
                            each=visible
                            key=|a| a.id.clone()
                            children=move |article| {
                                let id = StoredValue::new(article.id.clone());
                                let is_open = move || id.with_value(|id| expanded.with(|set| set.contains(id)));
                                let question = article.question.clone();
                                view! {
                                    <div class="faq" class:faq--open=is_open>
                                        <button
                                            class="faq__question"
                                            on:click=move |_| toggle(id.get_value())
                                        >
                                            <span class="faq__chevron">
                                                {move || if is_open() { icon("chevron-down") } else { icon("chevron-right") }}
                                            </span>
                                            <span>{move || highlight_matches(&question, &query.get())}</span>
                                            <span class="faq__topic">{article.topic.label()}</span>
                                        </button>
                                        <Show when=is_open>
                                            <div class="faq__answer">{article.answer.clone()}</div>
                                        </Show>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
