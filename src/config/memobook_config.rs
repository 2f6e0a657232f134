//! Memobook configuration file handling
//!
//! Loads and manages the optional ~/.config/memobook/config.yaml file.

use crate::presentation::{EllipsisMode, MemoFormatter, DEFAULT_PREVIEW_CHARS};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Label rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Number of content characters shown per memo
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,

    /// When to append "..." to the preview
    #[serde(default)]
    pub ellipsis: EllipsisMode,
}

fn default_preview_chars() -> usize {
    DEFAULT_PREVIEW_CHARS
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview_chars: default_preview_chars(),
            ellipsis: EllipsisMode::default(),
        }
    }
}

impl DisplayConfig {
    pub fn formatter(&self) -> MemoFormatter {
        MemoFormatter::new(self.preview_chars, self.ellipsis)
    }
}

/// Memobook configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemobookConfig {
    /// Path of the JSON memo file
    #[serde(default = "default_memo_file")]
    pub memo_file: PathBuf,

    /// Label rendering
    #[serde(default)]
    pub display: DisplayConfig,

    /// Save the collection after sorting, so the order survives a restart
    #[serde(default = "default_persist_sort")]
    pub persist_sort: bool,
}

fn config_dir() -> PathBuf {
    // Always use ~/.config for consistency across platforms (macOS, Linux)
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".config");
    path.push("memobook");
    path
}

fn default_memo_file() -> PathBuf {
    config_dir().join("memos.json")
}

fn default_persist_sort() -> bool {
    true
}

impl MemobookConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self {
            memo_file: default_memo_file(),
            display: DisplayConfig::default(),
            persist_sort: default_persist_sort(),
        }
    }

    /// Load configuration from a specific path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(crate::MemoError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        tracing::info!(path = %path.display(), "Loading Memobook configuration");

        let content = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;

        tracing::debug!(
            memo_file = %config.memo_file.display(),
            preview_chars = config.display.preview_chars,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Load configuration, using defaults when the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::new())
        }
    }

    /// Save configuration to a specific path
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        tracing::info!(path = %path.display(), "Saving Memobook configuration");

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;

        Ok(())
    }

    /// Get the default config path (~/.config/memobook/config.yaml)
    pub fn default_path() -> PathBuf {
        config_dir().join("config.yaml")
    }
}

impl Default for MemobookConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_defaults() {
        let config = MemobookConfig::new();
        assert!(config.memo_file.ends_with("memobook/memos.json"));
        assert_eq!(config.display.preview_chars, 30);
        assert_eq!(config.display.ellipsis, EllipsisMode::WhenTruncated);
        assert!(config.persist_sort);
    }

    #[test]
    fn test_save_and_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        let mut config = MemobookConfig::new();
        config.memo_file = PathBuf::from("/data/memos.json");
        config.display.ellipsis = EllipsisMode::Always;
        config.persist_sort = false;

        config.save(path).unwrap();

        let loaded = MemobookConfig::load(path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "memo_file: /tmp/m.json\n").unwrap();

        let config = MemobookConfig::load(temp_file.path()).unwrap();
        assert_eq!(config.memo_file, PathBuf::from("/tmp/m.json"));
        assert_eq!(config.display, DisplayConfig::default());
        assert!(config.persist_sort);
    }

    #[test]
    fn test_ellipsis_yaml_names() {
        let config: MemobookConfig =
            serde_yaml::from_str("display:\n  ellipsis: always\n  preview_chars: 10\n").unwrap();
        assert_eq!(config.display.ellipsis, EllipsisMode::Always);
        assert_eq!(config.display.formatter().preview_chars, 10);
    }

    #[test]
    fn test_load_missing_file() {
        let result = MemobookConfig::load("/nonexistent/config.yaml");
        assert!(result.is_err());

        let fallback = MemobookConfig::load_or_default("/nonexistent/config.yaml").unwrap();
        assert_eq!(fallback, MemobookConfig::new());
    }

    #[test]
    fn test_default_path() {
        let path = MemobookConfig::default_path();
        assert!(path.ends_with("memobook/config.yaml"));
    }
}
