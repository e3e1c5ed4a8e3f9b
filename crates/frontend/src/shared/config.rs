//! Конфигурация приложения на стороне браузера.
//!
//! Встроенный TOML из `contracts` может быть переопределён JSON-объектом
//! в localStorage под ключом `app_config`.

use contracts::shared::config::{load_config, AppConfig, CONFIG_STORAGE_KEY};
use leptos::prelude::*;
use web_sys::window;

fn read_override() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten())
}

/// Загружает конфигурацию. Битый override не ломает запуск: пишем
/// предупреждение и используем значения по умолчанию.
pub fn load_app_config() -> AppConfig {
    let override_json = read_override();
    match load_config(override_json.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("Invalid '{}' override, using defaults: {:#}", CONFIG_STORAGE_KEY, e);
            load_config(None).unwrap_or_default()
        }
    }
}

/// Уровень логирования из `ui.log_level`; неизвестное значение = Debug.
pub fn log_level(config: &AppConfig) -> log::Level {
    config
        .ui
        .log_level
        .trim()
        .parse::<log::Level>()
        .unwrap_or(log::Level::Debug)
}

/// Конфигурация из контекста (предоставляется в `App`).
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found in context")
}
