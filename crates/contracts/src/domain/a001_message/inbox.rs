//! View-model почтового ящика.
//!
//! Хранит все сообщения, выбранную вкладку, выбранное сообщение и строку
//! поиска. Отображаемый список и счётчик непрочитанных вычисляются из
//! текущего состояния при каждом вызове, поэтому после любой мутации
//! читатель видит актуальные данные.

use super::aggregate::{Message, MessageCategory};
use crate::domain::common::{find_record, find_record_mut, remove_record};
use crate::shared::search::filter_list;

#[derive(Debug, Clone, Default)]
pub struct Inbox {
    messages: Vec<Message>,
    selected_category: MessageCategory,
    selected_id: Option<String>,
    search: String,
}

impl Inbox {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    /// Ящик с заданной стартовой вкладкой
    pub fn with_category(messages: Vec<Message>, category: MessageCategory) -> Self {
        Self {
            messages,
            selected_category: category,
            ..Self::default()
        }
    }

    // ========================================================================
    // Чтение состояния
    // ========================================================================

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn selected_category(&self) -> MessageCategory {
        self.selected_category
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Выбранное сообщение, если оно ещё существует
    pub fn selected_message(&self) -> Option<&Message> {
        let id = self.selected_id.as_deref()?;
        find_record(&self.messages, id)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    // ========================================================================
    // Производные представления
    // ========================================================================

    /// Сообщения выбранной вкладки, отфильтрованные по строке поиска
    /// и отсортированные от новых к старым.
    pub fn filtered_messages(&self) -> Vec<&Message> {
        let in_category = self
            .messages
            .iter()
            .filter(|m| m.category == self.selected_category);
        let mut result = filter_list(in_category, &self.search);
        // sort_by стабильна: сообщения с одинаковым временем сохраняют исходный порядок
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        result
    }

    /// Количество непрочитанных во "Входящих"
    pub fn unread_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.category == MessageCategory::Inbox && !m.is_read)
            .count()
    }

    /// Количество сообщений в папке (без учёта поиска)
    pub fn category_count(&self, category: MessageCategory) -> usize {
        self.messages
            .iter()
            .filter(|m| m.category == category)
            .count()
    }

    // ========================================================================
    // Операции
    // ========================================================================

    pub fn select_category(&mut self, category: MessageCategory) {
        self.selected_category = category;
        self.selected_id = None;
    }

    /// Выбрать сообщение. Непрочитанное входящее при этом помечается прочитанным.
    pub fn select_message(&mut self, id: &str) {
        let Some(message) = find_record_mut(&mut self.messages, id) else {
            return;
        };
        if message.category == MessageCategory::Inbox && !message.is_read {
            message.is_read = true;
        }
        self.selected_id = Some(id.to_string());
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn mark_as_read(&mut self, id: &str) {
        if let Some(message) = find_record_mut(&mut self.messages, id) {
            message.is_read = true;
        }
    }

    pub fn mark_as_unread(&mut self, id: &str) {
        if let Some(message) = find_record_mut(&mut self.messages, id) {
            message.is_read = false;
        }
    }

    pub fn toggle_important(&mut self, id: &str) {
        if let Some(message) = find_record_mut(&mut self.messages, id) {
            message.is_important = !message.is_important;
        }
    }

    pub fn delete(&mut self, id: &str) {
        if remove_record(&mut self.messages, id).is_some() {
            self.clear_selection_of(id);
        }
    }

    pub fn archive(&mut self, id: &str) {
        if let Some(message) = find_record_mut(&mut self.messages, id) {
            message.category = MessageCategory::Archive;
            self.clear_selection_of(id);
        }
    }

    fn clear_selection_of(&mut self, id: &str) {
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_message::aggregate::Sender;
    use crate::domain::a001_message::seed::seed_messages;
    use chrono::{TimeZone, Utc};

    fn msg(id: &str, subject: &str, day: u32, category: MessageCategory) -> Message {
        Message::new(
            id,
            subject,
            "body text",
            Sender::new("s", "Ivan Sidorov", "ivan@example.com"),
            Utc.with_ymd_and_hms(2024, 9, day, 12, 0, 0).unwrap(),
            category,
        )
    }

    fn ids(inbox: &Inbox) -> Vec<String> {
        inbox
            .filtered_messages()
            .into_iter()
            .map(|m| m.id.clone())
            .collect()
    }

    #[test]
    fn test_seed_unread_count_and_select() {
        let mut inbox = Inbox::new(seed_messages());
        let inbox_dates: Vec<u32> = {
            use chrono::Datelike;
            inbox.filtered_messages().iter().map(|m| m.created_at.day()).collect()
        };
        assert_eq!(inbox_dates, vec![27, 26, 25]);
        assert_eq!(inbox.unread_count(), 1);

        let unread_id = inbox
            .filtered_messages()
            .into_iter()
            .find(|m| !m.is_read)
            .map(|m| m.id.clone())
            .unwrap();
        inbox.select_message(&unread_id);
        assert_eq!(inbox.unread_count(), 0);
        assert_eq!(inbox.selected_id(), Some(unread_id.as_str()));
    }

    #[test]
    fn test_filter_by_category_exact() {
        let mut inbox = Inbox::new(seed_messages());
        for category in MessageCategory::all() {
            inbox.select_category(category);
            let visible = inbox.filtered_messages();
            assert!(visible.iter().all(|m| m.category == category));
            assert_eq!(visible.len(), inbox.category_count(category));
        }
    }

    #[test]
    fn test_sorted_descending() {
        let inbox = Inbox::new(vec![
            msg("a", "first", 10, MessageCategory::Inbox),
            msg("b", "second", 20, MessageCategory::Inbox),
            msg("c", "third", 15, MessageCategory::Inbox),
        ]);
        assert_eq!(ids(&inbox), vec!["b", "c", "a"]);
        let visible = inbox.filtered_messages();
        for pair in visible.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn test_sort_is_stable_for_equal_timestamps() {
        let inbox = Inbox::new(vec![
            msg("x", "one", 10, MessageCategory::Inbox),
            msg("y", "two", 10, MessageCategory::Inbox),
        ]);
        assert_eq!(ids(&inbox), vec!["x", "y"]);
    }

    #[test]
    fn test_search_case_insensitive_and_clear() {
        let mut inbox = Inbox::new(vec![
            msg("a", "Invoice overdue", 10, MessageCategory::Inbox),
            msg("b", "Lunch", 11, MessageCategory::Inbox),
            msg("c", "Invoice copy", 12, MessageCategory::Sent),
        ]);
        inbox.set_search("INVOICE");
        assert_eq!(ids(&inbox), vec!["a"]);

        inbox.set_search("sidorov");
        assert_eq!(ids(&inbox), vec!["b", "a"]);

        inbox.set_search("");
        assert_eq!(ids(&inbox), vec!["b", "a"]);
    }

    #[test]
    fn test_search_ignores_surrounding_whitespace() {
        let mut inbox = Inbox::new(vec![
            msg("a", "Invoice overdue", 10, MessageCategory::Inbox),
            msg("b", "Lunch", 11, MessageCategory::Inbox),
        ]);
        inbox.set_search(" invoice ");
        assert_eq!(ids(&inbox), vec!["a"]);
        // сама строка поиска хранится как введена
        assert_eq!(inbox.search(), " invoice ");

        inbox.set_search("   ");
        assert_eq!(ids(&inbox), vec!["b", "a"]);
    }

    #[test]
    fn test_select_category_clears_selection() {
        let mut inbox = Inbox::new(seed_messages());
        let id = inbox.filtered_messages()[0].id.clone();
        inbox.select_message(&id);
        inbox.select_category(MessageCategory::Sent);
        assert_eq!(inbox.selected_id(), None);
        assert_eq!(inbox.selected_category(), MessageCategory::Sent);
    }

    #[test]
    fn test_clear_selection_closes_reading_pane() {
        let mut inbox = Inbox::new(seed_messages());
        let id = inbox.filtered_messages()[0].id.clone();
        inbox.select_message(&id);
        assert!(inbox.selected_message().is_some());

        inbox.clear_selection();
        assert_eq!(inbox.selected_id(), None);
        assert!(inbox.selected_message().is_none());
        // сообщение остаётся в списке и остаётся прочитанным
        assert!(inbox.filtered_messages().iter().any(|m| m.id == id && m.is_read));
    }

    #[test]
    fn test_select_non_inbox_does_not_mark_read() {
        let mut inbox = Inbox::new(vec![msg("d", "draft", 1, MessageCategory::Draft)]);
        inbox.select_message("d");
        assert!(!inbox.messages()[0].is_read);
        assert_eq!(inbox.selected_id(), Some("d"));
    }

    #[test]
    fn test_select_missing_is_noop() {
        let mut inbox = Inbox::new(vec![msg("a", "s", 1, MessageCategory::Inbox)]);
        inbox.select_message("a");
        inbox.select_message("missing");
        assert_eq!(inbox.selected_id(), Some("a"));
    }

    #[test]
    fn test_mark_read_idempotent() {
        let mut inbox = Inbox::new(seed_messages());
        let id = inbox
            .messages()
            .iter()
            .find(|m| !m.is_read)
            .map(|m| m.id.clone())
            .unwrap();
        inbox.mark_as_read(&id);
        let once = inbox.messages().to_vec();
        inbox.mark_as_read(&id);
        assert_eq!(inbox.messages(), once.as_slice());
    }

    #[test]
    fn test_mark_unread() {
        let mut inbox = Inbox::new(vec![msg("a", "s", 1, MessageCategory::Inbox).read()]);
        assert_eq!(inbox.unread_count(), 0);
        inbox.mark_as_unread("a");
        assert_eq!(inbox.unread_count(), 1);
    }

    #[test]
    fn test_toggle_important() {
        let mut inbox = Inbox::new(vec![msg("a", "s", 1, MessageCategory::Inbox)]);
        inbox.toggle_important("a");
        assert!(inbox.messages()[0].is_important);
        inbox.toggle_important("a");
        assert!(!inbox.messages()[0].is_important);
        inbox.toggle_important("zzz");
        assert!(!inbox.messages()[0].is_important);
    }

    #[test]
    fn test_delete_then_ops_are_noops() {
        let mut inbox = Inbox::new(seed_messages());
        let id = inbox.filtered_messages()[0].id.clone();
        inbox.select_message(&id);
        inbox.delete(&id);
        assert_eq!(inbox.selected_id(), None);

        let after_delete = inbox.messages().to_vec();
        inbox.mark_as_read(&id);
        inbox.mark_as_unread(&id);
        inbox.toggle_important(&id);
        inbox.archive(&id);
        inbox.select_message(&id);
        inbox.delete(&id);
        assert_eq!(inbox.messages(), after_delete.as_slice());
        assert_eq!(inbox.selected_id(), None);
        assert!(inbox.messages().iter().all(|m| m.id != id));
    }

    #[test]
    fn test_delete_keeps_other_selection() {
        let mut inbox = Inbox::new(vec![
            msg("a", "s", 1, MessageCategory::Inbox),
            msg("b", "s", 2, MessageCategory::Inbox),
        ]);
        inbox.select_message("a");
        inbox.delete("b");
        assert_eq!(inbox.selected_id(), Some("a"));
    }

    #[test]
    fn test_archive_moves_and_clears_selection() {
        let mut inbox = Inbox::new(vec![
            msg("a", "s", 1, MessageCategory::Inbox),
            msg("b", "s", 2, MessageCategory::Inbox),
        ]);
        inbox.select_message("a");
        inbox.archive("a");
        assert_eq!(inbox.selected_id(), None);
        assert_eq!(ids(&inbox), vec!["b"]);

        inbox.select_category(MessageCategory::Archive);
        assert_eq!(ids(&inbox), vec!["a"]);
    }

    #[test]
    fn test_selected_message_after_delete() {
        let mut inbox = Inbox::new(vec![msg("a", "s", 1, MessageCategory::Inbox)]);
        inbox.select_message("a");
        assert_eq!(inbox.selected_message().map(|m| m.id.as_str()), Some("a"));
        inbox.delete("a");
        assert!(inbox.selected_message().is_none());
    }

    #[test]
    fn test_with_category() {
        let inbox = Inbox::with_category(seed_messages(), MessageCategory::Archive);
        assert_eq!(inbox.selected_category(), MessageCategory::Archive);
        assert!(inbox
            .filtered_messages()
            .iter()
            .all(|m| m.category == MessageCategory::Archive));
    }
}
