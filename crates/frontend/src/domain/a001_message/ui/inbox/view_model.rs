use contracts::domain::a001_message::{seed_messages, Inbox, Message, MessageCategory};
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

/// ViewModel of the message inbox.
///
/// One instance per session, provided via context: the sidebar badge and
/// the inbox page read the same state.
#[derive(Clone, Copy)]
pub struct InboxVm {
    pub state: RwSignal<Inbox>,
}

impl InboxVm {
    pub fn new(config: &AppConfig) -> Self {
        let category = MessageCategory::from_str(&config.inbox.default_category).unwrap_or_else(|e| {
            log::warn!("{}; falling back to '{}'", e, MessageCategory::default().as_str());
            MessageCategory::default()
        });
        Self {
            state: RwSignal::new(Inbox::with_category(seed_messages(), category)),
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn unread_count(&self) -> usize {
        self.state.with(|s| s.unread_count())
    }

    pub fn category_count(&self, category: MessageCategory) -> usize {
        self.state.with(|s| s.category_count(category))
    }

    pub fn selected_category(&self) -> MessageCategory {
        self.state.with(|s| s.selected_category())
    }

    pub fn selected_id(&self) -> Option<String> {
        self.state.with(|s| s.selected_id().map(str::to_string))
    }

    pub fn selected_message(&self) -> Option<Message> {
        self.state.with(|s| s.selected_message().cloned())
    }

    pub fn search(&self) -> String {
        self.state.with(|s| s.search().to_string())
    }

    pub fn filtered_messages(&self) -> Vec<Message> {
        self.state
            .with(|s| s.filtered_messages().into_iter().cloned().collect())
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    pub fn select_category(&self, category: MessageCategory) {
        log::debug!("inbox: select_category {}", category.as_str());
        self.state.update(|s| s.select_category(category));
    }

    pub fn select_message(&self, id: &str) {
        log::debug!("inbox: select_message {}", id);
        self.state.update(|s| s.select_message(id));
    }

    pub fn clear_selection(&self) {
        self.state.update(|s| s.clear_selection());
    }

    pub fn set_search(&self, query: String) {
        log::debug!("inbox: search '{}'", query);
        self.state.update(|s| s.set_search(query));
    }

    pub fn mark_as_read(&self, id: &str) {
        log::debug!("inbox: mark_as_read {}", id);
        self.state.update(|s| s.mark_as_read(id));
    }

    pub fn mark_as_unread(&self, id: &str) {
        log::debug!("inbox: mark_as_unread {}", id);
        self.state.update(|s| s.mark_as_unread(id));
    }

    pub fn toggle_important(&self, id: &str) {
        log::debug!("inbox: toggle_important {}", id);
        self.state.update(|s| s.toggle_important(id));
    }

    pub fn delete(&self, id: &str) {
        log::debug!("inbox: delete {}", id);
        self.state.update(|s| s.delete(id));
    }

    pub fn archive(&self, id: &str) {
        log::debug!("inbox: archive {}", id);
        self.state.update(|s| s.archive(id));
    }
}
