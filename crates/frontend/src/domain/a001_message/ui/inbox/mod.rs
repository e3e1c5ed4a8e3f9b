//! Message inbox UI Module
//!
//! MVVM:
//! - view_model.rs: session state (`Inbox`) behind a signal, with commands
//! - view.rs: folder bar, search and message list
//! - message_detail.rs: reading pane for the selected message

mod message_detail;
mod view;
mod view_model;

pub use view::MessageInbox;
pub use view_model::InboxVm;
