//! Configuration validation
//!
//! Checks a Memobook configuration for values that would break the CLI:
//! - A memo file path is set and is not a directory
//! - The preview width is usable

use super::memobook_config::MemobookConfig;
use crate::MemoError;

/// Validation error details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// Validate a Memobook configuration
pub fn validate_config(config: &MemobookConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.memo_file.as_os_str().is_empty() {
        errors.push(ValidationError::new("memo_file", "Memo file path cannot be empty"));
    } else if config.memo_file.is_dir() {
        errors.push(ValidationError::new(
            "memo_file",
            format!("{} is a directory", config.memo_file.display()),
        ));
    }

    if config.display.preview_chars == 0 {
        errors.push(ValidationError::new(
            "display.preview_chars",
            "Preview width must be greater than 0",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate configuration and return a Result
pub fn validate_config_result(config: &MemobookConfig) -> crate::Result<()> {
    validate_config(config).map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        MemoError::Validation(format!(
            "Configuration validation failed:\n  - {}",
            messages.join("\n  - ")
        ))
    })
}
