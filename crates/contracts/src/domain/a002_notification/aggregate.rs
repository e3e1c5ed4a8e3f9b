use crate::domain::common::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Важность уведомления
///
/// Закрытый набор значений: всё нераспознанное считается `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationSeverity {
    Success,
    Warning,
    Error,
    #[default]
    #[serde(other)]
    Info,
}

/// Иконка и цветовой токен для отображения важности
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

impl NotificationSeverity {
    /// Разбор без ошибок: неизвестное значение даёт `Info`
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "success" => NotificationSeverity::Success,
            "warning" => NotificationSeverity::Warning,
            "error" => NotificationSeverity::Error,
            _ => NotificationSeverity::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationSeverity::Info => "info",
            NotificationSeverity::Success => "success",
            NotificationSeverity::Warning => "warning",
            NotificationSeverity::Error => "error",
        }
    }

    pub fn style(&self) -> SeverityStyle {
        match self {
            NotificationSeverity::Success => SeverityStyle {
                icon: "check-circle",
                color: "var(--color-success)",
            },
            NotificationSeverity::Warning => SeverityStyle {
                icon: "alert-triangle",
                color: "var(--color-warning)",
            },
            NotificationSeverity::Error => SeverityStyle {
                icon: "x-circle",
                color: "var(--color-error)",
            },
            NotificationSeverity::Info => SeverityStyle {
                icon: "info",
                color: "var(--color-info)",
            },
        }
    }
}

/// Раздел системы, к которому относится уведомление
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    System,
    Sales,
    Purchases,
    Payroll,
    Accounting,
}

impl NotificationCategory {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "system" => Ok(NotificationCategory::System),
            "sales" => Ok(NotificationCategory::Sales),
            "purchases" => Ok(NotificationCategory::Purchases),
            "payroll" => Ok(NotificationCategory::Payroll),
            "accounting" => Ok(NotificationCategory::Accounting),
            _ => Err(format!("Unknown notification category: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationCategory::System => "system",
            NotificationCategory::Sales => "sales",
            NotificationCategory::Purchases => "purchases",
            NotificationCategory::Payroll => "payroll",
            NotificationCategory::Accounting => "accounting",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationCategory::System => "System",
            NotificationCategory::Sales => "Sales",
            NotificationCategory::Purchases => "Purchases",
            NotificationCategory::Payroll => "Payroll",
            NotificationCategory::Accounting => "Accounting",
        }
    }

    pub fn all() -> [NotificationCategory; 5] {
        [
            NotificationCategory::System,
            NotificationCategory::Sales,
            NotificationCategory::Purchases,
            NotificationCategory::Payroll,
            NotificationCategory::Accounting,
        ]
    }
}

/// Фильтр центра уведомлений: все, непрочитанные или один раздел
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Category(NotificationCategory),
}

impl NotificationFilter {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "all" => Ok(NotificationFilter::All),
            "unread" => Ok(NotificationFilter::Unread),
            other => NotificationCategory::from_str(other)
                .map(NotificationFilter::Category)
                .map_err(|_| format!("Unknown notification filter: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationFilter::All => "all",
            NotificationFilter::Unread => "unread",
            NotificationFilter::Category(c) => c.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationFilter::All => "All",
            NotificationFilter::Unread => "Unread",
            NotificationFilter::Category(c) => c.label(),
        }
    }

    /// Варианты фильтра в порядке отображения
    pub fn options() -> Vec<NotificationFilter> {
        let mut options = vec![NotificationFilter::All, NotificationFilter::Unread];
        options.extend(
            NotificationCategory::all()
                .into_iter()
                .map(NotificationFilter::Category),
        );
        options
    }

    pub fn matches(&self, notification: &Notification) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Unread => !notification.is_read,
            NotificationFilter::Category(c) => notification.category == *c,
        }
    }
}

/// Уведомление
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub severity: NotificationSeverity,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    pub category: NotificationCategory,
    /// Куда перейти по кнопке действия (ключ таба)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
}

impl Notification {
    pub fn new(
        id: &str,
        title: &str,
        message: &str,
        severity: NotificationSeverity,
        category: NotificationCategory,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            message: message.to_string(),
            severity,
            created_at,
            is_read: false,
            category,
            action_url: None,
        }
    }

    pub fn read(mut self) -> Self {
        self.is_read = true;
        self
    }

    pub fn with_action(mut self, action_url: &str) -> Self {
        self.action_url = Some(action_url.to_string());
        self
    }
}

impl Record for Notification {
    fn record_id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_severity_deserializes_as_info() {
        let severity: NotificationSeverity = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(severity, NotificationSeverity::Info);
        let severity: NotificationSeverity = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(severity, NotificationSeverity::Warning);
    }

    #[test]
    fn test_severity_lossy_parse_and_style() {
        assert_eq!(
            NotificationSeverity::from_str_lossy("bogus"),
            NotificationSeverity::Info
        );
        assert_eq!(
            NotificationSeverity::from_str_lossy("bogus").style(),
            NotificationSeverity::Info.style()
        );
        assert_eq!(NotificationSeverity::Error.style().icon, "x-circle");
        assert_eq!(NotificationSeverity::Success.style().color, "var(--color-success)");
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(NotificationFilter::from_str("all"), Ok(NotificationFilter::All));
        assert_eq!(NotificationFilter::from_str("unread"), Ok(NotificationFilter::Unread));
        assert_eq!(
            NotificationFilter::from_str("payroll"),
            Ok(NotificationFilter::Category(NotificationCategory::Payroll))
        );
        assert!(NotificationFilter::from_str("marketing").is_err());
    }

    #[test]
    fn test_filter_options_order() {
        let options: Vec<&str> = NotificationFilter::options()
            .iter()
            .map(|f| f.as_str())
            .collect();
        assert_eq!(
            options,
            vec!["all", "unread", "system", "sales", "purchases", "payroll", "accounting"]
        );
    }

    #[test]
    fn test_missing_severity_defaults_to_info() {
        let json = r#"{
            "id": "n1",
            "title": "t",
            "message": "m",
            "created_at": "2024-09-27T10:00:00Z",
            "is_read": false,
            "category": "sales"
        }"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.severity, NotificationSeverity::Info);
        assert_eq!(n.action_url, None);
    }
}
