//! Общие типы и бизнес-логика back-office приложения.
//!
//! Крейт не зависит от UI-фреймворка: здесь живут записи (сообщения,
//! уведомления, статьи справки), их view-model состояния, форматирование
//! и конфигурация. Frontend только оборачивает эти типы в сигналы.

pub mod domain;
pub mod shared;
