//! In-memory memo collection
//!
//! Pure operations over the ordered memo list. No I/O happens here; callers
//! persist through `MemoStore` after each mutation.

use super::record::{timestamp_now, Memo};
use crate::{MemoError, Result};
use std::collections::BTreeSet;

/// Snapshot of selected positions, bound to the collection version it was taken from
///
/// Mutations bump the repository version, so a selection that outlives a
/// mutation is rejected instead of hitting the wrong memos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    version: u64,
    indices: BTreeSet<usize>,
}

impl Selection {
    /// Build a selection for a view rendered at `version`
    pub fn new(version: u64, indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            version,
            indices: indices.into_iter().collect(),
        }
    }

    /// Selected positions, ascending
    pub fn indices(&self) -> &BTreeSet<usize> {
        &self.indices
    }

    /// Lowest selected position
    pub fn first(&self) -> Option<usize> {
        self.indices.iter().next().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Ordered memo collection
///
/// Insertion order is the display order until `sort_by_date_descending`
/// reorders it. Removal never reorders survivors.
#[derive(Debug, Clone, Default)]
pub struct MemoRepository {
    memos: Vec<Memo>,
    version: u64,
}

impl MemoRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already loaded collection
    pub fn from_memos(memos: Vec<Memo>) -> Self {
        Self { memos, version: 0 }
    }

    pub fn memos(&self) -> &[Memo] {
        &self.memos
    }

    pub fn len(&self) -> usize {
        self.memos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memos.is_empty()
    }

    /// Current collection version, bumped by every effective mutation
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Take a selection snapshot against the current version
    pub fn select(&self, indices: impl IntoIterator<Item = usize>) -> Selection {
        Selection::new(self.version, indices)
    }

    /// Append a memo stamped with the current time
    ///
    /// Callers reject empty input first (see `normalize_content`).
    pub fn add(&mut self, content: impl Into<String>) -> Memo {
        let memo = Memo::new(content);
        self.memos.push(memo.clone());
        self.touch();
        tracing::debug!(count = self.memos.len(), "Added memo");
        memo
    }

    /// Memos whose content contains `term`, ignoring case
    ///
    /// An empty term returns the whole collection.
    pub fn search(&self, term: &str) -> Vec<&Memo> {
        self.search_positions(term)
            .into_iter()
            .map(|i| &self.memos[i])
            .collect()
    }

    /// Positions of the memos `search` would return
    pub fn search_positions(&self, term: &str) -> Vec<usize> {
        if term.is_empty() {
            return (0..self.memos.len()).collect();
        }
        self.memos
            .iter()
            .enumerate()
            .filter(|(_, memo)| memo.matches(term))
            .map(|(i, _)| i)
            .collect()
    }

    /// Replace the content at `index` and restamp its date
    ///
    /// The new date never goes backwards: if the clock reads earlier than the
    /// stored date, the stored date is kept.
    pub fn edit(&mut self, index: usize, new_content: impl Into<String>) -> Result<Memo> {
        let len = self.memos.len();
        let memo = self
            .memos
            .get_mut(index)
            .ok_or(MemoError::IndexOutOfRange { index, len })?;

        let now = timestamp_now();
        if now > memo.date {
            memo.date = now;
        }
        memo.content = new_content.into();

        let edited = memo.clone();
        self.touch();
        tracing::debug!(index, "Edited memo");
        Ok(edited)
    }

    /// Edit the first memo of a selection
    ///
    /// Returns `Ok(None)` for an empty selection.
    pub fn edit_selected(
        &mut self,
        selection: &Selection,
        new_content: impl Into<String>,
    ) -> Result<Option<Memo>> {
        self.check_fresh(selection)?;
        match selection.first() {
            Some(index) => self.edit(index, new_content).map(Some),
            None => Ok(None),
        }
    }

    /// Remove the memos at `indices`, returning them in collection order
    ///
    /// Out-of-range indices are ignored. Survivors keep their relative order.
    pub fn delete(&mut self, indices: &BTreeSet<usize>) -> Vec<Memo> {
        if indices.is_empty() {
            return Vec::new();
        }

        let (kept, removed): (Vec<_>, Vec<_>) = std::mem::take(&mut self.memos)
            .into_iter()
            .enumerate()
            .partition(|(i, _)| !indices.contains(i));

        self.memos = kept.into_iter().map(|(_, memo)| memo).collect();
        let removed: Vec<Memo> = removed.into_iter().map(|(_, memo)| memo).collect();

        if !removed.is_empty() {
            self.touch();
        }
        tracing::debug!(
            requested = indices.len(),
            removed = removed.len(),
            remaining = self.memos.len(),
            "Deleted memos"
        );
        removed
    }

    /// Delete every memo in a selection
    pub fn delete_selected(&mut self, selection: &Selection) -> Result<Vec<Memo>> {
        self.check_fresh(selection)?;
        Ok(self.delete(selection.indices()))
    }

    /// Newest first, stable for equal dates
    pub fn sort_by_date_descending(&mut self) {
        self.memos.sort_by(|a, b| b.date.cmp(&a.date));
        self.touch();
    }

    fn check_fresh(&self, selection: &Selection) -> Result<()> {
        if selection.version != self.version {
            tracing::warn!(
                expected = selection.version,
                actual = self.version,
                "Rejected stale selection"
            );
            return Err(MemoError::StaleSelection {
                expected: selection.version,
                actual: self.version,
            });
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.version += 1;
    }
}
