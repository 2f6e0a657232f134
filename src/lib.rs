//! Memobook - Single-user memo manager
//!
//! Create, search, edit, delete, and sort short text memos kept in a local
//! JSON file.
//!
//! # Architecture
//!
//! - **memo**: Memo record and the in-memory MemoRepository
//! - **storage**: JSON file persistence (MemoStore)
//! - **presentation**: Display labels (MemoFormatter)
//! - **controller**: Intent dispatch tying repository, store, and labels together
//! - **config**: YAML configuration and validation

pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod memo;
pub mod presentation;
pub mod storage;
pub mod style;

// Re-exports
pub use controller::{Intent, Outcome, Session, View};
pub use error::{MemoError, Result};
pub use memo::{Memo, MemoRepository, Selection};
pub use presentation::{EllipsisMode, MemoFormatter};
pub use storage::{LoadOutcome, MemoStore};
