/// UI-утилиты для списков: подсветка совпадений и поле поиска с debounce
use leptos::prelude::*;
use wasm_bindgen::JsCast;

const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Разбивает `text` на фрагменты (текст, совпадение?) по вхождениям `filter`
/// без учёта регистра. Если нижний регистр меняет длину строки в байтах,
/// индексы нельзя переносить обратно, и текст возвращается целиком.
pub fn split_matches<'a>(text: &'a str, filter: &str) -> Vec<(&'a str, bool)> {
    let filter_lower = filter.trim().to_lowercase();
    let text_lower = text.to_lowercase();
    if filter_lower.is_empty() || text_lower.len() != text.len() {
        return vec![(text, false)];
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            break;
        }
        if start > last_pos {
            parts.push((&text[last_pos..start], false));
        }
        parts.push((&text[start..end], true));
        last_pos = end;
    }
    if last_pos < text.len() || parts.is_empty() {
        parts.push((&text[last_pos..], false));
    }
    parts
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    split_matches(text, filter)
        .into_iter()
        .map(|(part, is_match)| {
            let part = part.to_string();
            if is_match {
                view! { <mark class="search-highlight">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let cancel_pending = move || {
        if let (Some(timeout_id), Some(w)) = (debounce_timeout.get_value(), web_sys::window()) {
            w.clear_timeout_with_handle(timeout_id);
        }
        debounce_timeout.set_value(None);
    };

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        cancel_pending();

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        let callback = wasm_bindgen::closure::Closure::once_into_js(move || {
            on_change.run(new_value);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<js_sys::Function>(),
            SEARCH_DEBOUNCE_MS,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        cancel_pending();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
