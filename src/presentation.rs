//! Display labels for memos
//!
//! Renders each memo as `"{date} - {preview}"` where the preview is the first
//! few characters of its content. Stateless apart from its settings.

use crate::memo::Memo;
use serde::{Deserialize, Serialize};

/// Default number of content characters shown in a label
pub const DEFAULT_PREVIEW_CHARS: usize = 30;

const ELLIPSIS: &str = "...";

/// When to append the ellipsis marker to a preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EllipsisMode {
    /// Only when content was actually cut
    #[default]
    WhenTruncated,
    /// On every label, even when the whole content fits
    Always,
}

/// Formats memos into list labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoFormatter {
    pub preview_chars: usize,
    pub ellipsis: EllipsisMode,
}

impl Default for MemoFormatter {
    fn default() -> Self {
        Self {
            preview_chars: DEFAULT_PREVIEW_CHARS,
            ellipsis: EllipsisMode::default(),
        }
    }
}

impl MemoFormatter {
    pub fn new(preview_chars: usize, ellipsis: EllipsisMode) -> Self {
        Self {
            preview_chars,
            ellipsis,
        }
    }

    /// Label for a single memo
    pub fn label(&self, memo: &Memo) -> String {
        format!("{} - {}", memo.date, self.preview(&memo.content))
    }

    /// Labels for a memo list, in the same order
    pub fn format(&self, memos: &[Memo]) -> Vec<String> {
        memos.iter().map(|memo| self.label(memo)).collect()
    }

    /// Content cut to `preview_chars` characters, never inside a character
    pub fn preview(&self, content: &str) -> String {
        let mut chars = content.chars();
        let head: String = chars.by_ref().take(self.preview_chars).collect();
        let truncated = chars.next().is_some();

        match (self.ellipsis, truncated) {
            (EllipsisMode::Always, _) | (EllipsisMode::WhenTruncated, true) => {
                format!("{}{}", head, ELLIPSIS)
            }
            (EllipsisMode::WhenTruncated, false) => head,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memo(content: &str) -> Memo {
        Memo::with_date(content, "2024-01-01 10:00:00")
    }

    #[test]
    fn test_short_content_not_marked() {
        let formatter = MemoFormatter::default();
        assert_eq!(formatter.label(&memo("hello")), "2024-01-01 10:00:00 - hello");
    }

    #[test]
    fn test_long_content_truncated() {
        let formatter = MemoFormatter::default();
        let content = "abcdefghijklmnopqrstuvwxyz0123456789";
        assert_eq!(
            formatter.label(&memo(content)),
            "2024-01-01 10:00:00 - abcdefghijklmnopqrstuvwxyz0123..."
        );
    }

    #[test]
    fn test_exact_width_not_marked() {
        let formatter = MemoFormatter::default();
        let content = "x".repeat(30);
        assert_eq!(formatter.preview(&content), content);
    }

    #[test]
    fn test_always_mode_matches_legacy_labels() {
        let formatter = MemoFormatter::new(30, EllipsisMode::Always);
        assert_eq!(formatter.label(&memo("hi")), "2024-01-01 10:00:00 - hi...");
        assert_eq!(formatter.preview(""), "...");
    }

    #[test]
    fn test_truncation_counts_characters() {
        let formatter = MemoFormatter::new(3, EllipsisMode::WhenTruncated);
        assert_eq!(formatter.preview("日本語のメモ"), "日本語...");
        assert_eq!(formatter.preview("日本"), "日本");
    }

    #[test]
    fn test_format_preserves_order_and_input() {
        let formatter = MemoFormatter::default();
        let memos = vec![memo("b"), memo("a")];
        let labels = formatter.format(&memos);
        assert_eq!(
            labels,
            vec!["2024-01-01 10:00:00 - b", "2024-01-01 10:00:00 - a"]
        );
        assert_eq!(memos[0].content, "b");
    }
}
