//! a001: внутренние сообщения (почтовый ящик)

pub mod aggregate;
pub mod inbox;
pub mod seed;

pub use aggregate::{Attachment, Message, MessageCategory, Sender};
pub use inbox::Inbox;
pub use seed::seed_messages;
