//! Memo record
//!
//! A memo is a piece of text plus the local time it was last written.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Timestamp format stored in the `date` field.
///
/// Fixed-width and zero-padded, so string order equals chronological order.
/// Changing it breaks sorting of existing files.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time formatted with [`DATE_FORMAT`]
pub fn timestamp_now() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// Normalize user input for a new or edited memo
///
/// Returns `None` when the input is empty or whitespace-only. Otherwise the
/// text is kept verbatim apart from trailing line breaks left by line readers.
pub fn normalize_content(input: &str) -> Option<String> {
    let content = input.trim_end_matches(['\r', '\n']);
    if content.trim().is_empty() {
        None
    } else {
        Some(content.to_string())
    }
}

/// A single memo
///
/// Serialized as `{"content": ..., "date": ...}`; both fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    /// User text, stored untruncated
    pub content: String,

    /// Last write time formatted with [`DATE_FORMAT`]
    pub date: String,
}

impl Memo {
    /// Create a memo stamped with the current local time
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_date(content, timestamp_now())
    }

    /// Create a memo with an explicit date string
    pub fn with_date(content: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            date: date.into(),
        }
    }

    /// Case-insensitive substring match against the content
    pub fn matches(&self, term: &str) -> bool {
        self.content.to_lowercase().contains(&term.to_lowercase())
    }
}
