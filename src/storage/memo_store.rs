//! JSON array persistence for memos
//!
//! The whole collection is one pretty-printed JSON array, rewritten in full on
//! every save. Non-ASCII text is written verbatim as UTF-8.

use crate::memo::Memo;
use crate::{MemoError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// What `MemoStore::load_detailed` found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// File parsed into memos
    Loaded(Vec<Memo>),
    /// No file at the configured path
    Missing,
    /// File exists but is empty or whitespace-only
    Empty,
    /// File content is not a valid memo array
    Corrupt(String),
    /// File exists but could not be read
    Unreadable(String),
}

impl LoadOutcome {
    /// Memos to start from; every non-`Loaded` outcome yields an empty collection
    pub fn into_memos(self) -> Vec<Memo> {
        match self {
            LoadOutcome::Loaded(memos) => memos,
            _ => Vec::new(),
        }
    }
}

/// File-backed memo store
#[derive(Debug, Clone)]
pub struct MemoStore {
    path: PathBuf,
}

impl MemoStore {
    /// Create a store for the memo file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load memos, falling back to an empty collection on any problem
    pub fn load(&self) -> Vec<Memo> {
        self.load_detailed().into_memos()
    }

    /// Load memos and report why nothing was loaded, if that is the case
    pub fn load_detailed(&self) -> LoadOutcome {
        let path = self.path.as_path();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "Memo file not found, starting empty");
                return LoadOutcome::Missing;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read memo file, starting empty");
                return LoadOutcome::Unreadable(e.to_string());
            }
        };

        if content.trim().is_empty() {
            tracing::info!(path = %path.display(), "Memo file is empty, starting empty");
            return LoadOutcome::Empty;
        }

        match serde_json::from_str::<Vec<Memo>>(&content) {
            Ok(memos) => {
                tracing::debug!(path = %path.display(), count = memos.len(), "Loaded memos");
                LoadOutcome::Loaded(memos)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Memo file is corrupt, starting empty");
                LoadOutcome::Corrupt(e.to_string())
            }
        }
    }

    /// Overwrite the memo file with `memos`
    ///
    /// Writes to a temporary file in the same directory and renames it over
    /// the target, so readers never see a partial file.
    pub fn save(&self, memos: &[Memo]) -> Result<()> {
        let json = serde_json::to_vec_pretty(memos)?;
        self.write_atomic(&json).map_err(|source| {
            tracing::error!(path = %self.path.display(), error = %source, "Failed to save memos");
            MemoError::Persistence {
                path: self.path.clone(),
                source,
            }
        })?;

        tracing::debug!(path = %self.path.display(), count = memos.len(), "Saved memos");
        Ok(())
    }

    fn write_atomic(&self, bytes: &[u8]) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut temp = NamedTempFile::new_in(&dir)?;
        // The rename replaces the inode, so carry the existing file's mode over
        match fs::metadata(&self.path) {
            Ok(meta) => temp.as_file().set_permissions(meta.permissions())?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        temp.write_all(bytes)?;
        temp.write_all(b"\n")?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = MemoStore::new(temp_dir.path().join("memos.json"));

        let memos = vec![
            Memo::with_date("first", "2024-01-01 10:00:00"),
            Memo::with_date("second", "2024-01-02 10:00:00"),
        ];
        store.save(&memos).unwrap();

        assert_eq!(store.load(), memos);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = MemoStore::new(temp_dir.path().join("absent.json"));
        assert_eq!(store.load_detailed(), LoadOutcome::Missing);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_empty_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let store = MemoStore::new(temp_file.path());
        assert_eq!(store.load_detailed(), LoadOutcome::Empty);

        std::fs::write(temp_file.path(), "  \n\t ").unwrap();
        assert_eq!(store.load_detailed(), LoadOutcome::Empty);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "{invalid").unwrap();

        let store = MemoStore::new(temp_file.path());
        assert!(matches!(store.load_detailed(), LoadOutcome::Corrupt(_)));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_record_missing_field() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), r#"[{"content":"no date"}]"#).unwrap();

        let store = MemoStore::new(temp_file.path());
        assert!(matches!(store.load_detailed(), LoadOutcome::Corrupt(_)));
    }

    #[test]
    fn test_non_ascii_written_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("memos.json");
        let store = MemoStore::new(&path);

        let memos = vec![Memo::with_date("買い物リスト ☕", "2024-01-01 10:00:00")];
        store.save(&memos).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("買い物リスト ☕"));
        assert!(!raw.contains("\\u"));
        assert!(raw.contains("\n  {"));
        assert_eq!(store.load(), memos);
    }

    #[test]
    fn test_save_overwrites_and_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("memos.json");
        let store = MemoStore::new(&path);

        store.save(&[Memo::with_date("one", "2024-01-01 10:00:00")]).unwrap();
        store.save(&[]).unwrap();

        assert_eq!(store.load_detailed(), LoadOutcome::Loaded(vec![]));
        let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap())
            .unwrap()
            .collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("memos.json");
        std::fs::write(&path, "[]").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let store = MemoStore::new(&path);
        store.save(&[Memo::with_date("x", "2024-01-01 10:00:00")]).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let temp_file = NamedTempFile::new().unwrap();
        // A regular file cannot act as a parent directory
        let store = MemoStore::new(temp_file.path().join("memos.json"));

        let err = store.save(&[Memo::with_date("x", "2024-01-01 10:00:00")]).unwrap_err();
        assert!(err.is_persistence());
    }
}
