//! Memo data model
//!
//! Defines the Memo record and the in-memory MemoRepository that owns the
//! collection.

mod record;
mod repository;

pub use record::{normalize_content, timestamp_now, Memo, DATE_FORMAT};
pub use repository::{MemoRepository, Selection};
