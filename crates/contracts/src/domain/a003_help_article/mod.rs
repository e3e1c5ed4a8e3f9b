//! a003: статьи справочного центра (FAQ)

pub mod aggregate;
pub mod seed;

pub use aggregate::{filter_articles, HelpArticle, HelpTopic};
pub use seed::seed_articles;
