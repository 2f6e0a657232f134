//! Configuration system
//!
//! Loads the optional ~/.config/memobook/config.yaml with:
//! - The memo file location
//! - Label rendering preferences
//! - Whether sorting is persisted

mod memobook_config;
pub mod validation;

pub use memobook_config::{DisplayConfig, MemobookConfig};
pub use validation::{validate_config, validate_config_result, ValidationError};
