//! Storage layer
//!
//! Persists the memo collection as a single JSON array file. This is the only
//! module that touches the filesystem for memo data.

mod memo_store;

pub use memo_store::{LoadOutcome, MemoStore};
