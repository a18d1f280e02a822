//! Search and result-list actions
//!
//! Every action derived from background work carries the generation of
//! the paginated stream it belongs to. The reducer drops actions from
//! superseded generations, so a stale fetch can never overwrite state
//! for a newer query.

use crate::paging::RepoPage;

/// Actions for the search screen
#[derive(Debug, Clone)]
pub enum SearchAction {
    /// Submit a query: start a fresh paginated stream, superseding any
    /// in-flight stream for a previous query
    Submit(String),

    /// A fresh paginated stream was created for `query`
    Started { generation: u64, query: String },

    /// Pager signalled that a page load began
    Loading { generation: u64 },

    /// Pager signalled a finished page (key and row count of that page)
    LoadSucceeded {
        generation: u64,
        key: u32,
        items: usize,
    },

    /// Pager signalled a failed load attempt
    LoadFailed { generation: u64, message: String },

    /// A loaded page, ready to merge into the list
    PageLoaded {
        generation: u64,
        key: u32,
        page: RepoPage,
    },

    /// The list was cleared ahead of reloading from `key`
    RefreshStarted { generation: u64, key: u32 },

    /// Load the page after the last loaded one
    LoadNextPage,
    /// Load the page before the first loaded one
    LoadPrevPage,
    /// Reload from the key closest to the current scroll position
    Refresh,

    // Navigation (cursor within the result list)
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,

    /// Open the selected repository in the browser
    OpenInBrowser,

    /// The transient error banner was displayed and may be cleared
    ErrorShown,
}
