//! Terminal styling utilities
//!
//! Consistent colors for CLI output. Uses crossterm for cross-platform terminal colors.

use crossterm::style::{StyledContent, Stylize};

/// Row number shown before a memo label
pub fn position(n: usize) -> StyledContent<String> {
    format!("[{}]", n).dark_grey()
}

/// Memo label; the date part is highlighted
pub fn label(text: &str) -> String {
    match text.split_once(" - ") {
        Some((date, preview)) => format!("{} - {}", date.to_string().cyan(), preview),
        None => text.to_string(),
    }
}

/// Count styling: dim when zero
pub fn count(n: usize) -> StyledContent<String> {
    if n == 0 {
        n.to_string().dark_grey()
    } else {
        n.to_string().green()
    }
}

/// Section headers
pub fn header(text: &str) -> StyledContent<String> {
    text.to_string().bold()
}

/// Dim/muted text
pub fn dim(text: &str) -> StyledContent<String> {
    text.to_string().dark_grey()
}

/// Success text
pub fn success(text: &str) -> StyledContent<String> {
    text.to_string().green()
}

/// Warning text
pub fn warning(text: &str) -> StyledContent<String> {
    text.to_string().yellow()
}

/// Error text
pub fn error(text: &str) -> StyledContent<String> {
    text.to_string().red()
}
