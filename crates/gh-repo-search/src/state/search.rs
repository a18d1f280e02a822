//! Search screen state

use crate::domain::Repository;
use crate::paging::{LoadedPage, PagingSnapshot};
use chrono::{DateTime, Local};

/// One loaded page as it sits in the flattened item list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice {
    pub key: u32,
    pub len: usize,
}

/// State of the active search and its result list
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// The submitted query this state belongs to
    pub query: String,
    /// Generation of the active paginated stream; actions stamped with an
    /// older generation are dropped
    pub generation: u64,

    /// Flattened items of all loaded pages, in page order
    pub items: Vec<Repository>,
    /// The loaded pages behind `items`, in display order
    pub pages: Vec<PageSlice>,
    /// Cursor index into `items`
    pub selected: usize,

    /// Key of the page before the first loaded one, if any
    pub prev_key: Option<u32>,
    /// Key of the page after the last loaded one, if any
    pub next_key: Option<u32>,

    pub is_loading: bool,
    pub error_message: Option<String>,
    /// When the current error became visible (drives banner expiry)
    pub error_since: Option<DateTime<Local>>,
    pub empty_list_message: Option<String>,
}

impl SearchState {
    /// The repository under the cursor
    pub fn selected_repository(&self) -> Option<&Repository> {
        self.items.get(self.selected)
    }

    /// Whether the cursor is within `threshold` rows of the loaded end
    pub fn near_end(&self, threshold: usize) -> bool {
        !self.items.is_empty() && self.selected + threshold >= self.items.len()
    }

    /// Snapshot of the loaded pages for refresh-key resolution, anchored
    /// at the cursor.
    pub fn paging_snapshot(&self) -> PagingSnapshot {
        let last_key = self.pages.last().map(|slice| slice.key);
        let pages = self
            .pages
            .iter()
            .map(|slice| LoadedPage {
                prev_key: (slice.key > 1).then(|| slice.key - 1),
                next_key: if Some(slice.key) == last_key {
                    self.next_key
                } else {
                    Some(slice.key + 1)
                },
                len: slice.len,
            })
            .collect();

        let anchor = (!self.items.is_empty()).then_some(self.selected);
        PagingSnapshot::new(pages, anchor)
    }
}
