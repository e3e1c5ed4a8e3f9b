//! Common types and traits for all records

pub mod record;

// Re-exports
pub use record::{find_record, find_record_mut, remove_record, Record};
