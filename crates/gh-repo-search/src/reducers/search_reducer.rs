//! Search reducer
//!
//! Applies pager events and page data to the search state. Every
//! background-derived action carries the generation of the stream it
//! belongs to; actions from superseded generations are dropped here, so
//! a stale fetch can never overwrite state for a newer query.

use crate::actions::SearchAction;
use crate::paging::RepoPage;
use crate::state::{PageSlice, SearchState};
use chrono::Local;

/// Message shown when a search matched nothing
pub const EMPTY_LIST_MESSAGE: &str = "No repositories found.\nTry another search.";

/// How long the transient error banner stays visible
const ERROR_BANNER_SECS: i64 = 4;

/// Reduce search state based on actions
pub fn reduce_search(mut state: SearchState, action: &SearchAction) -> SearchState {
    match action {
        SearchAction::Started { generation, query } => {
            // A fresh stream supersedes everything the old one published.
            state = SearchState {
                query: query.clone(),
                generation: *generation,
                ..SearchState::default()
            };
        }

        SearchAction::Loading { generation } => {
            if *generation == state.generation {
                state.is_loading = true;
                state.error_message = None;
                state.error_since = None;
            }
        }

        SearchAction::LoadSucceeded {
            generation, items, ..
        } => {
            if *generation == state.generation {
                state.is_loading = false;
                state.error_message = None;
                state.error_since = None;
                state.empty_list_message = if *items == 0 && state.items.is_empty() {
                    Some(EMPTY_LIST_MESSAGE.to_string())
                } else {
                    None
                };
            }
        }

        SearchAction::LoadFailed {
            generation,
            message,
        } => {
            if *generation == state.generation {
                state.is_loading = false;
                state.error_message = Some(message.clone());
                state.error_since = Some(Local::now());
            }
        }

        SearchAction::PageLoaded {
            generation,
            key,
            page,
        } => {
            if *generation == state.generation {
                merge_page(&mut state, *key, page);
            } else {
                log::debug!(
                    "Dropping page {} from superseded generation {}",
                    key,
                    generation
                );
            }
        }

        SearchAction::RefreshStarted { generation, key } => {
            if *generation == state.generation {
                log::debug!("Refreshing from page {}", key);
                state.items.clear();
                state.pages.clear();
                state.selected = 0;
                state.prev_key = None;
                state.next_key = None;
                state.empty_list_message = None;
            }
        }

        SearchAction::NavigateNext => {
            if !state.items.is_empty() {
                state.selected = (state.selected + 1).min(state.items.len() - 1);
            }
        }

        SearchAction::NavigatePrevious => {
            state.selected = state.selected.saturating_sub(1);
        }

        SearchAction::NavigateToTop => {
            state.selected = 0;
        }

        SearchAction::NavigateToBottom => {
            state.selected = state.items.len().saturating_sub(1);
        }

        SearchAction::ErrorShown => {
            state.error_message = None;
            state.error_since = None;
        }

        // Consumed by the search middleware.
        SearchAction::Submit(_)
        | SearchAction::LoadNextPage
        | SearchAction::LoadPrevPage
        | SearchAction::Refresh
        | SearchAction::OpenInBrowser => {}
    }

    state
}

/// Clear an error banner that has been visible long enough
pub fn expire_stale_error(mut state: SearchState) -> SearchState {
    if let Some(since) = state.error_since {
        if (Local::now() - since).num_seconds() >= ERROR_BANNER_SECS {
            state.error_message = None;
            state.error_since = None;
        }
    }
    state
}

/// Merge a loaded page into the flattened list
///
/// The first page initializes the list; pages with a smaller key prepend,
/// pages with a larger key append. A key already present is a duplicate
/// load and is ignored, which keeps merging idempotent.
fn merge_page(state: &mut SearchState, key: u32, page: &RepoPage) {
    let first = state.pages.first().map(|slice| slice.key);
    let last = state.pages.last().map(|slice| slice.key);

    if state.pages.is_empty() {
        state.items = page.items.clone();
        state.pages.push(PageSlice {
            key,
            len: page.items.len(),
        });
        state.prev_key = page.prev_key;
        state.next_key = page.next_key;
        state.selected = 0;
    } else if first.is_some_and(|f| key < f) {
        // Keep the cursor on the same row while rows appear above it.
        state.items.splice(0..0, page.items.iter().cloned());
        state.pages.insert(
            0,
            PageSlice {
                key,
                len: page.items.len(),
            },
        );
        state.prev_key = page.prev_key;
        state.selected += page.items.len();
    } else if last.is_some_and(|l| key > l) {
        state.items.extend(page.items.iter().cloned());
        state.pages.push(PageSlice {
            key,
            len: page.items.len(),
        });
        state.next_key = page.next_key;
    } else {
        log::debug!("Ignoring duplicate page {}", key);
    }
}
