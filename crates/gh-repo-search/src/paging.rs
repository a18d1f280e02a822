//! Incremental pager
//!
//! Adapts the single-shot search use case into a keyed, bidirectional
//! paginated source. Keys are positive page numbers; page 1 is the
//! initial and refresh key. Progress is reported as [`PageEvent`] values
//! on a single channel so the state holder observes loading, success and
//! failure without the pager knowing anything about UI state.
//!
//! The pager never retries: a failed attempt is terminal and the host
//! retries by calling [`RepoPageSource::load`] again. It also never
//! enforces single-flight itself; the host serializes loads.

use crate::domain::{Repository, Resource, SearchRepositoriesUseCase};
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;

/// Fixed page size of the search endpoint
pub const PAGE_SIZE: u8 = 30;

/// The initial and refresh page key
pub const FIRST_PAGE: u32 = 1;

/// One bounded batch of results plus its neighbor keys
///
/// Invariants: `prev_key` is `None` iff this is the first page;
/// `next_key` is `None` iff the total item count is exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPage {
    pub items: Vec<Repository>,
    pub prev_key: Option<u32>,
    pub next_key: Option<u32>,
}

/// Terminal failure of one load attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PageLoadError {
    pub message: String,
}

impl PageLoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Progress notifications emitted by the pager
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// A load attempt began
    Loading,
    /// A page finished loading (`items` is the row count of that page)
    Loaded { key: u32, items: usize },
    /// A load attempt failed
    Failed { message: String },
}

/// Paginated source for one active query
pub struct RepoPageSource {
    use_case: SearchRepositoriesUseCase,
    query: String,
    /// Treat the end-of-results condition as a failure instead of a
    /// sentinel row (the detail layout shows it as a banner)
    eol_as_error: bool,
    events: UnboundedSender<PageEvent>,
}

impl RepoPageSource {
    pub fn new(
        use_case: SearchRepositoriesUseCase,
        query: impl Into<String>,
        eol_as_error: bool,
        events: UnboundedSender<PageEvent>,
    ) -> Self {
        Self {
            use_case,
            query: query.into(),
            eol_as_error,
            events,
        }
    }

    /// Load one page; `None` means the initial key
    ///
    /// Emits `Loading` before the call and exactly one of
    /// `Loaded`/`Failed` after it. Loading a key twice against identical
    /// upstream data yields identical pages.
    pub async fn load(&self, key: Option<u32>) -> Result<RepoPage, PageLoadError> {
        let key = key.unwrap_or(FIRST_PAGE);
        self.emit(PageEvent::Loading);
        log::debug!("Loading page {} for {:?}", key, self.query);

        match self.use_case.call(&self.query, PAGE_SIZE, key).await {
            Resource::Success(body) => {
                let max_pages = page_count(body.total_count, PAGE_SIZE);
                let items: Vec<Repository> = body.items.iter().map(Repository::from).collect();

                self.emit(PageEvent::Loaded {
                    key,
                    items: items.len(),
                });
                Ok(RepoPage {
                    items,
                    prev_key: (key > FIRST_PAGE).then(|| key - 1),
                    next_key: (u64::from(key) < max_pages).then(|| key + 1),
                })
            }

            Resource::EndOfList { message, .. } if !self.eol_as_error => {
                // Soft boundary: a final page carrying the sentinel row.
                self.emit(PageEvent::Loaded { key, items: 1 });
                Ok(RepoPage {
                    items: vec![Repository::end_of_list(&message)],
                    prev_key: (key > FIRST_PAGE).then(|| key - 1),
                    next_key: None,
                })
            }

            Resource::EndOfList { message, .. } | Resource::Error { message, .. } => {
                self.emit(PageEvent::Failed {
                    message: message.clone(),
                });
                Err(PageLoadError::new(message))
            }
        }
    }

    fn emit(&self, event: PageEvent) {
        if self.events.send(event).is_err() {
            log::debug!("Page event channel closed, dropping event");
        }
    }
}

/// Number of pages needed for `total` items at the given page size
pub fn page_count(total: u64, page_size: u8) -> u64 {
    total.div_ceil(u64::from(page_size))
}

/// A loaded page as the state holder remembers it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPage {
    pub prev_key: Option<u32>,
    pub next_key: Option<u32>,
    pub len: usize,
}

/// Snapshot of the loaded pages plus the anchor scroll position, used to
/// pick the reload key after invalidation without losing scroll context.
#[derive(Debug, Clone, Default)]
pub struct PagingSnapshot {
    pages: Vec<LoadedPage>,
    anchor: Option<usize>,
}

impl PagingSnapshot {
    /// `pages` in display order; `anchor` is an index into the flattened
    /// item list (the current scroll position).
    pub fn new(pages: Vec<LoadedPage>, anchor: Option<usize>) -> Self {
        Self { pages, anchor }
    }

    /// The key to reload from: for the page closest to the anchor,
    /// `prev_key + 1`, else `next_key - 1`, else `None`.
    pub fn refresh_key(&self) -> Option<u32> {
        let anchor = self.anchor?;
        let page = self.closest_page_to(anchor)?;
        page.prev_key
            .map(|key| key + 1)
            .or_else(|| page.next_key.map(|key| key - 1))
    }

    /// The page containing `position`, or the last page when the position
    /// points past the loaded items.
    fn closest_page_to(&self, position: usize) -> Option<&LoadedPage> {
        let mut consumed = 0;
        for page in &self.pages {
            consumed += page.len;
            if position < consumed {
                return Some(page);
            }
        }
        self.pages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{response_with, FakeSearchClient};
    use gh_search_client::{ApiErrorBody, SearchError};
    use std::sync::Arc;
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

    fn source_with(
        client: FakeSearchClient,
        eol_as_error: bool,
    ) -> (RepoPageSource, UnboundedReceiver<PageEvent>) {
        let (tx, rx) = unbounded_channel();
        let use_case = SearchRepositoriesUseCase::new(Arc::new(client));
        (RepoPageSource::new(use_case, "kotlin", eol_as_error, tx), rx)
    }

    fn window_error() -> SearchError {
        SearchError::Status {
            status: 422,
            reason: "Unprocessable Entity".to_string(),
            body: Some(ApiErrorBody {
                message: "Only the first 1000 search results are available".to_string(),
                documentation_url: Some("https://docs.github.com/v3/search/".to_string()),
            }),
        }
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(0, 30), 0);
        assert_eq!(page_count(1, 30), 1);
        assert_eq!(page_count(30, 30), 1);
        assert_eq!(page_count(31, 30), 2);
        assert_eq!(page_count(60, 30), 2);
        assert_eq!(page_count(61, 30), 3);
    }

    #[tokio::test]
    async fn test_two_page_walk() {
        // total_count = 60, page size 30: exactly two pages.
        let client = FakeSearchClient::new()
            .with_response(Ok(response_with(60, 30, 0)))
            .with_response(Ok(response_with(60, 30, 30)));
        let (source, _rx) = source_with(client, false);

        let first = source.load(None).await.unwrap();
        assert_eq!(first.items.len(), 30);
        assert_eq!(first.prev_key, None);
        assert_eq!(first.next_key, Some(2));

        let second = source.load(first.next_key).await.unwrap();
        assert_eq!(second.items.len(), 30);
        assert_eq!(second.prev_key, Some(1));
        assert_eq!(second.next_key, None);
    }

    #[tokio::test]
    async fn test_partial_last_page() {
        // 61 items: page 3 exists and is the last one.
        let client = FakeSearchClient::new().with_response(Ok(response_with(61, 1, 60)));
        let (source, _rx) = source_with(client, false);

        let page = source.load(Some(3)).await.unwrap();
        assert_eq!(page.prev_key, Some(2));
        assert_eq!(page.next_key, None);
    }

    #[tokio::test]
    async fn test_empty_result_is_a_single_empty_page() {
        let client = FakeSearchClient::new().with_response(Ok(response_with(0, 0, 0)));
        let (source, mut rx) = source_with(client, false);

        let page = source.load(None).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.prev_key, None);
        assert_eq!(page.next_key, None);

        assert_eq!(rx.try_recv().unwrap(), PageEvent::Loading);
        assert_eq!(rx.try_recv().unwrap(), PageEvent::Loaded { key: 1, items: 0 });
    }

    #[tokio::test]
    async fn test_load_emits_loading_then_loaded() {
        let client = FakeSearchClient::new().with_response(Ok(response_with(60, 30, 0)));
        let (source, mut rx) = source_with(client, false);

        source.load(Some(2)).await.unwrap();

        assert_eq!(rx.try_recv().unwrap(), PageEvent::Loading);
        assert_eq!(
            rx.try_recv().unwrap(),
            PageEvent::Loaded { key: 2, items: 30 }
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_error_is_terminal_and_reported() {
        let client = FakeSearchClient::new().with_response(Err(SearchError::Status {
            status: 400,
            reason: "Bad Request".to_string(),
            body: None,
        }));
        let (source, mut rx) = source_with(client, false);

        let err = source.load(None).await.unwrap_err();
        assert!(err.message.contains("400"), "{}", err.message);

        assert_eq!(rx.try_recv().unwrap(), PageEvent::Loading);
        assert!(matches!(rx.try_recv().unwrap(), PageEvent::Failed { .. }));
    }

    #[tokio::test]
    async fn test_transport_failure_is_reported_before_returning() {
        let client = FakeSearchClient::new()
            .with_response(Err(SearchError::Transport("connection reset".to_string())));
        let (source, mut rx) = source_with(client, false);

        let err = source.load(None).await.unwrap_err();
        assert_eq!(err.message, "connection reset");

        assert_eq!(rx.try_recv().unwrap(), PageEvent::Loading);
        assert_eq!(
            rx.try_recv().unwrap(),
            PageEvent::Failed {
                message: "connection reset".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_end_of_list_becomes_sentinel_page() {
        let client = FakeSearchClient::new().with_response(Err(window_error()));
        let (source, _rx) = source_with(client, false);

        let page = source.load(Some(35)).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert!(page.items[0].is_end_of_list());
        assert_eq!(page.prev_key, Some(34));
        assert_eq!(page.next_key, None);
        assert_eq!(
            page.items[0].end_of_list_message.as_deref(),
            Some("Only the first 1000 search results are available\nhttps://docs.github.com/v3/search/")
        );
    }

    #[tokio::test]
    async fn test_end_of_list_as_error_fails_the_load() {
        let client = FakeSearchClient::new().with_response(Err(window_error()));
        let (source, mut rx) = source_with(client, true);

        let err = source.load(Some(35)).await.unwrap_err();
        assert!(err.message.contains("first 1000"));

        assert_eq!(rx.try_recv().unwrap(), PageEvent::Loading);
        assert!(matches!(rx.try_recv().unwrap(), PageEvent::Failed { .. }));
    }

    #[tokio::test]
    async fn test_identical_upstream_yields_identical_pages() {
        let client = FakeSearchClient::new()
            .with_response(Ok(response_with(60, 30, 0)))
            .with_response(Ok(response_with(60, 30, 0)));
        let (source, _rx) = source_with(client, false);

        let first = source.load(Some(1)).await.unwrap();
        let second = source.load(Some(1)).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_load_requests_the_given_key() {
        let client = FakeSearchClient::new().with_response(Ok(response_with(300, 30, 60)));
        let calls = client.calls();
        let (source, _rx) = source_with(client, false);

        source.load(Some(3)).await.unwrap();

        let recorded = calls.lock().unwrap();
        assert_eq!(*recorded, vec![("kotlin".to_string(), 30u8, 3u32)]);
    }

    #[test]
    fn test_refresh_key_prefers_prev_key_plus_one() {
        let snapshot = PagingSnapshot::new(
            vec![
                LoadedPage {
                    prev_key: None,
                    next_key: Some(2),
                    len: 30,
                },
                LoadedPage {
                    prev_key: Some(1),
                    next_key: Some(3),
                    len: 30,
                },
            ],
            Some(35),
        );
        // Anchor sits in the second page: prev_key + 1 = 2.
        assert_eq!(snapshot.refresh_key(), Some(2));
    }

    #[test]
    fn test_refresh_key_falls_back_to_next_key_minus_one() {
        let snapshot = PagingSnapshot::new(
            vec![LoadedPage {
                prev_key: None,
                next_key: Some(2),
                len: 30,
            }],
            Some(10),
        );
        assert_eq!(snapshot.refresh_key(), Some(1));
    }

    #[test]
    fn test_refresh_key_without_anchor_or_pages() {
        let empty = PagingSnapshot::new(vec![], Some(3));
        assert_eq!(empty.refresh_key(), None);

        let unanchored = PagingSnapshot::new(
            vec![LoadedPage {
                prev_key: None,
                next_key: Some(2),
                len: 30,
            }],
            None,
        );
        assert_eq!(unanchored.refresh_key(), None);
    }

    #[test]
    fn test_refresh_key_for_single_exhausted_page() {
        // One page with neither neighbor: nothing sensible to resume from.
        let snapshot = PagingSnapshot::new(
            vec![LoadedPage {
                prev_key: None,
                next_key: None,
                len: 12,
            }],
            Some(4),
        );
        assert_eq!(snapshot.refresh_key(), None);
    }

    #[test]
    fn test_anchor_past_loaded_items_uses_last_page() {
        let snapshot = PagingSnapshot::new(
            vec![
                LoadedPage {
                    prev_key: None,
                    next_key: Some(2),
                    len: 30,
                },
                LoadedPage {
                    prev_key: Some(1),
                    next_key: None,
                    len: 12,
                },
            ],
            Some(500),
        );
        assert_eq!(snapshot.refresh_key(), Some(2));
    }
}
