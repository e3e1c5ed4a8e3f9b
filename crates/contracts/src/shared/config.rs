use serde::Deserialize;

/// Настройки приложения
///
/// Значения по умолчанию зашиты в бинарник (`DEFAULT_CONFIG`), поверх них
/// может быть наложен JSON из localStorage браузера.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub inbox: InboxConfig,
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    /// Ключ таба, открываемого при первом запуске
    pub start_tab: String,
    /// Уровень логирования в консоль браузера: error/warn/info/debug/trace
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InboxConfig {
    /// Вкладка почтового ящика по умолчанию
    pub default_category: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NotificationsConfig {
    /// Фильтр центра уведомлений по умолчанию
    pub default_filter: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Northwind ERP".to_string(),
            start_tab: "a001_message".to_string(),
            log_level: "debug".to_string(),
        }
    }
}

impl Default for InboxConfig {
    fn default() -> Self {
        Self {
            default_category: "inbox".to_string(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            default_filter: "all".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[ui]
title = "Northwind ERP"
start_tab = "a001_message"
log_level = "debug"

[inbox]
default_category = "inbox"

[notifications]
default_filter = "all"
"#;

/// localStorage key for the JSON override
pub const CONFIG_STORAGE_KEY: &str = "app_config";

/// Load configuration
///
/// Order:
/// 1. JSON override (e.g. from localStorage), missing fields take defaults
/// 2. Falls back to embedded default config
pub fn load_config(override_json: Option<&str>) -> anyhow::Result<AppConfig> {
    if let Some(json) = override_json.filter(|s| !s.trim().is_empty()) {
        let config: AppConfig = serde_json::from_str(json)?;
        return Ok(config);
    }

    let config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<AppConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_without_override() {
        let config = load_config(None).unwrap();
        assert_eq!(config.ui.start_tab, "a001_message");
        assert_eq!(config.inbox.default_category, "inbox");
        assert_eq!(config.notifications.default_filter, "all");
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{"notifications": {"default_filter": "unread"}, "ui": {"log_level": "warn"}}"#;
        let config = load_config(Some(json)).unwrap();
        assert_eq!(config.notifications.default_filter, "unread");
        assert_eq!(config.ui.log_level, "warn");
        assert_eq!(config.ui.title, "Northwind ERP");
        assert_eq!(config.inbox.default_category, "inbox");
    }

    #[test]
    fn test_blank_override_uses_default() {
        assert_eq!(load_config(Some("  ")).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_override_is_error() {
        assert!(load_config(Some("{not json")).is_err());
    }
}
