use crate::domain::common::Record;
use crate::shared::search::{contains_ignore_case, Searchable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Папка почтового ящика. Определяет, на какой вкладке видна запись.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageCategory {
    #[default]
    Inbox,
    Sent,
    Draft,
    Archive,
}

impl MessageCategory {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "inbox" => Ok(MessageCategory::Inbox),
            "sent" => Ok(MessageCategory::Sent),
            "draft" => Ok(MessageCategory::Draft),
            "archive" => Ok(MessageCategory::Archive),
            _ => Err(format!("Unknown message category: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageCategory::Inbox => "inbox",
            MessageCategory::Sent => "sent",
            MessageCategory::Draft => "draft",
            MessageCategory::Archive => "archive",
        }
    }

    /// Заголовок вкладки
    pub fn label(&self) -> &'static str {
        match self {
            MessageCategory::Inbox => "Inbox",
            MessageCategory::Sent => "Sent",
            MessageCategory::Draft => "Drafts",
            MessageCategory::Archive => "Archive",
        }
    }

    /// Имя иконки для вкладки (см. `frontend::shared::icons`)
    pub fn icon(&self) -> &'static str {
        match self {
            MessageCategory::Inbox => "inbox",
            MessageCategory::Sent => "send",
            MessageCategory::Draft => "file-text",
            MessageCategory::Archive => "archive",
        }
    }

    /// Все вкладки в порядке отображения
    pub fn all() -> [MessageCategory; 4] {
        [
            MessageCategory::Inbox,
            MessageCategory::Sent,
            MessageCategory::Draft,
            MessageCategory::Archive,
        ]
    }
}

/// Отправитель сообщения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sender {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Sender {
    pub fn new(id: &str, name: &str, email: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            avatar: None,
        }
    }

    /// Инициалы для аватара-заглушки: "Anna Petrova" -> "AP"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Вложение сообщения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    /// Размер в байтах
    pub size: u64,
    pub mime_type: String,
}

impl Attachment {
    pub fn new(name: &str, size: u64, mime_type: &str) -> Self {
        Self {
            name: name.to_string(),
            size,
            mime_type: mime_type.to_string(),
        }
    }
}

/// Сообщение внутренней почты
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub subject: String,
    pub body: String,
    pub sender: Sender,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    pub is_important: bool,
    pub category: MessageCategory,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Message {
    /// Создать непрочитанное сообщение без вложений
    pub fn new(
        id: &str,
        subject: &str,
        body: &str,
        sender: Sender,
        created_at: DateTime<Utc>,
        category: MessageCategory,
    ) -> Self {
        Self {
            id: id.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            sender,
            created_at,
            is_read: false,
            is_important: false,
            category,
            attachments: Vec::new(),
        }
    }

    pub fn read(mut self) -> Self {
        self.is_read = true;
        self
    }

    pub fn important(mut self) -> Self {
        self.is_important = true;
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    /// Первые `max_chars` символов тела для строки списка
    pub fn preview(&self, max_chars: usize) -> String {
        let mut chars = self.body.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}…", head.trim_end())
        } else {
            head
        }
    }
}

impl Record for Message {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Message {
    fn matches_filter(&self, filter_lower: &str) -> bool {
        contains_ignore_case(&self.subject, filter_lower)
            || contains_ignore_case(&self.sender.name, filter_lower)
            || contains_ignore_case(&self.body, filter_lower)
    }
}
