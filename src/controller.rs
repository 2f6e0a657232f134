//! Intent dispatch over a memo session
//!
//! A `Session` owns the repository and the store. Front ends (the CLI, the
//! interactive shell) turn user actions into `Intent`s and render the
//! returned `View`. Every mutating intent is saved before it returns.

use crate::config::MemobookConfig;
use crate::memo::{normalize_content, MemoRepository, Selection};
use crate::presentation::MemoFormatter;
use crate::storage::{LoadOutcome, MemoStore};
use crate::Result;

/// Named user actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Append a memo
    Add(String),

    /// Filter the view; an empty term shows everything
    Search(String),

    /// Replace the content of the first selected memo
    EditSelected {
        selection: Selection,
        content: String,
    },

    /// Remove the selected memos (confirmation happens before dispatch)
    DeleteSelected(Selection),

    /// Reorder newest first
    SortDescending,

    /// Save and stop
    Quit,
}

/// One rendered row of a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
    /// Position in the full collection, usable in a later selection
    pub position: usize,
    pub label: String,
}

/// Rows to display, tied to the collection version they were built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub version: u64,
    pub rows: Vec<ViewRow>,
}

impl View {
    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.label.as_str()).collect()
    }

    /// Selection of view rows, mapped back to collection positions
    ///
    /// Row numbers past the end of the view are dropped.
    pub fn select_rows(&self, rows: impl IntoIterator<Item = usize>) -> Selection {
        let positions = rows
            .into_iter()
            .filter_map(|row| self.rows.get(row).map(|r| r.position));
        Selection::new(self.version, positions)
    }

    /// Selection of collection positions, bound to this view's version
    pub fn select_positions(&self, positions: impl IntoIterator<Item = usize>) -> Selection {
        Selection::new(self.version, positions)
    }
}

/// Result of dispatching an intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Render these rows
    View(View),

    /// Nothing to do (empty input or empty selection)
    Ignored,

    /// Collection saved, stop the loop
    Quit,
}

/// Repository plus store, driven one intent at a time
#[derive(Debug)]
pub struct Session {
    repository: MemoRepository,
    store: MemoStore,
    formatter: MemoFormatter,
    persist_sort: bool,
    load_outcome: LoadOutcome,
}

impl Session {
    /// Load the collection from `store`
    pub fn open(store: MemoStore, formatter: MemoFormatter, persist_sort: bool) -> Self {
        let load_outcome = store.load_detailed();
        let memos = load_outcome.clone().into_memos();

        tracing::info!(
            path = %store.path().display(),
            count = memos.len(),
            "Opened memo session"
        );

        Self {
            repository: MemoRepository::from_memos(memos),
            store,
            formatter,
            persist_sort,
            load_outcome,
        }
    }

    /// Open the memo file named by `config`
    pub fn from_config(config: &MemobookConfig) -> Self {
        Self::open(
            MemoStore::new(&config.memo_file),
            config.display.formatter(),
            config.persist_sort,
        )
    }

    pub fn repository(&self) -> &MemoRepository {
        &self.repository
    }

    pub fn store(&self) -> &MemoStore {
        &self.store
    }

    /// How the initial load went (missing, empty, corrupt, ...)
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// Rows for the whole collection
    pub fn view(&self) -> View {
        self.view_of((0..self.repository.len()).collect())
    }

    /// Handle one intent
    ///
    /// On a save error the in-memory change is kept and the error returned,
    /// so the caller can warn that the change may be lost on restart.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Outcome> {
        match intent {
            Intent::Add(input) => {
                let Some(content) = normalize_content(&input) else {
                    return Ok(Outcome::Ignored);
                };
                self.repository.add(content);
                self.save()?;
            }
            Intent::Search(term) => {
                let positions = self.repository.search_positions(&term);
                return Ok(Outcome::View(self.view_of(positions)));
            }
            Intent::EditSelected { selection, content } => {
                let Some(content) = normalize_content(&content) else {
                    return Ok(Outcome::Ignored);
                };
                if self.repository.edit_selected(&selection, content)?.is_none() {
                    return Ok(Outcome::Ignored);
                }
                self.save()?;
            }
            Intent::DeleteSelected(selection) => {
                if selection.is_empty() {
                    return Ok(Outcome::Ignored);
                }
                let removed = self.repository.delete_selected(&selection)?;
                if !removed.is_empty() {
                    self.save()?;
                }
            }
            Intent::SortDescending => {
                self.repository.sort_by_date_descending();
                if self.persist_sort {
                    self.save()?;
                }
            }
            Intent::Quit => {
                self.save()?;
                return Ok(Outcome::Quit);
            }
        }

        Ok(Outcome::View(self.view()))
    }

    /// Write the current collection to the store
    pub fn save(&self) -> Result<()> {
        self.store.save(self.repository.memos())
    }

    fn view_of(&self, positions: Vec<usize>) -> View {
        let memos = self.repository.memos();
        let rows = positions
            .into_iter()
            .map(|position| ViewRow {
                position,
                label: self.formatter.label(&memos[position]),
            })
            .collect();

        View {
            version: self.repository.version(),
            rows,
        }
    }
}
