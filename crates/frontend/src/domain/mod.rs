pub mod a001_message;
pub mod a002_notification;
pub mod a003_help_article;
