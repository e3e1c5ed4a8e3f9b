//! Tab labels - единственный источник правды для заголовков табов.

/// Ключи табов приложения
pub const TAB_MESSAGES: &str = "a001_message";
pub const TAB_NOTIFICATIONS: &str = "a002_notification";
pub const TAB_HELP_CENTER: &str = "a003_help_center";
pub const TAB_SETTINGS: &str = "sys_settings";
pub const TAB_TEAM: &str = "sys_team";

/// Возвращает читаемый заголовок таба для данного ключа.
///
/// Fallback: пустая строка (вызывающий код подставляет сам ключ).
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Domain (a0xx) ─────────────────────────────────────────────────
        TAB_MESSAGES => "Messages",
        TAB_NOTIFICATIONS => "Notifications",
        TAB_HELP_CENTER => "Help Center",

        // ── System (sys_*) ────────────────────────────────────────────────
        TAB_SETTINGS => "Settings",
        TAB_TEAM => "Team",

        // ── Fallback ──────────────────────────────────────────────────────
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_have_labels() {
        for key in [TAB_MESSAGES, TAB_NOTIFICATIONS, TAB_HELP_CENTER, TAB_SETTINGS, TAB_TEAM] {
            assert!(!tab_label_for_key(key).is_empty(), "no label for {}", key);
        }
    }

    #[test]
    fn test_unknown_key_fallback() {
        assert_eq!(tab_label_for_key("p900_sales_register"), "");
    }
}
