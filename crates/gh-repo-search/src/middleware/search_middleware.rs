//! Search middleware
//!
//! Owns the async half of the presentation state holder: the tokio
//! runtime, the per-query page source, the generation counter and the
//! in-flight load. Submitting a query supersedes the previous stream
//! (last-query-wins): the old tasks are aborted and, as a second line of
//! defense, the reducer drops anything still stamped with the old
//! generation.

use crate::actions::{Action, SearchAction};
use crate::dispatcher::Dispatcher;
use crate::domain::SearchRepositoriesUseCase;
use crate::middleware::Middleware;
use crate::paging::{PageEvent, RepoPageSource, FIRST_PAGE};
use crate::state::AppState;
use crate::util::browser::open_url;
use gh_search_client::SearchClient;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::unbounded_channel;
use tokio::task::JoinHandle;

/// Start loading the next page when the cursor gets this close to the
/// end of the loaded items
const PREFETCH_THRESHOLD: usize = 5;

/// The active paginated stream for one submitted query
struct SearchSession {
    source: Arc<RepoPageSource>,
    generation: u64,
    forwarder: JoinHandle<()>,
    inflight: Option<JoinHandle<()>>,
}

/// Middleware for all search API operations
pub struct SearchMiddleware {
    runtime: Runtime,
    client: Arc<dyn SearchClient>,
    generation: u64,
    session: Option<SearchSession>,
}

impl SearchMiddleware {
    pub fn new(client: Arc<dyn SearchClient>) -> Self {
        let runtime = Runtime::new().expect("Failed to create tokio runtime");
        Self {
            runtime,
            client,
            generation: 0,
            session: None,
        }
    }

    /// Start a fresh paginated stream for `query`, superseding any
    /// previous one.
    fn start_search(&mut self, query: &str, state: &AppState, dispatcher: &Dispatcher) {
        self.generation += 1;
        let generation = self.generation;
        self.abort_session();

        log::info!("Starting search generation {} for {:?}", generation, query);

        let (events_tx, mut events_rx) = unbounded_channel();
        let use_case = SearchRepositoriesUseCase::new(Arc::clone(&self.client));
        let source = Arc::new(RepoPageSource::new(
            use_case,
            query,
            state.layout.eol_as_error(),
            events_tx,
        ));

        // Forward pager events into the action stream, stamped with this
        // stream's generation.
        let event_dispatcher = dispatcher.clone();
        let forwarder = self.runtime.spawn(async move {
            while let Some(event) = events_rx.recv().await {
                event_dispatcher.dispatch(Action::Search(match event {
                    PageEvent::Loading => SearchAction::Loading { generation },
                    PageEvent::Loaded { key, items } => SearchAction::LoadSucceeded {
                        generation,
                        key,
                        items,
                    },
                    PageEvent::Failed { message } => SearchAction::LoadFailed {
                        generation,
                        message,
                    },
                }));
            }
        });

        dispatcher.dispatch(Action::Search(SearchAction::Started {
            generation,
            query: query.to_string(),
        }));

        let mut session = SearchSession {
            source,
            generation,
            forwarder,
            inflight: None,
        };
        Self::spawn_load(&self.runtime, &mut session, None, dispatcher);
        self.session = Some(session);
    }

    /// Load one page on the session, unless a load is already in flight
    /// (the renderer-side single-flight guarantee).
    fn spawn_load(
        runtime: &Runtime,
        session: &mut SearchSession,
        key: Option<u32>,
        dispatcher: &Dispatcher,
    ) {
        if session
            .inflight
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
        {
            log::debug!("Page load already in flight, skipping key {:?}", key);
            return;
        }

        let source = Arc::clone(&session.source);
        let generation = session.generation;
        let dispatcher = dispatcher.clone();

        session.inflight = Some(runtime.spawn(async move {
            let requested = key.unwrap_or(FIRST_PAGE);
            match source.load(key).await {
                Ok(page) => {
                    dispatcher.dispatch(Action::Search(SearchAction::PageLoaded {
                        generation,
                        key: requested,
                        page,
                    }));
                }
                Err(e) => {
                    // Already surfaced through the event channel; the
                    // user retries by scrolling or re-searching.
                    log::warn!("Page {} load failed: {}", requested, e);
                }
            }
        }));
    }

    fn load_key(&mut self, key: u32, dispatcher: &Dispatcher) {
        let runtime = &self.runtime;
        if let Some(session) = self.session.as_mut() {
            Self::spawn_load(runtime, session, Some(key), dispatcher);
        }
    }

    fn abort_session(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!("Aborting search generation {}", session.generation);
            session.forwarder.abort();
            if let Some(inflight) = session.inflight {
                inflight.abort();
            }
        }
    }
}

impl Middleware for SearchMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Search(search_action) = action else {
            return true;
        };

        match search_action {
            SearchAction::Submit(query) => {
                let query = query.trim();
                if query.is_empty() {
                    log::debug!("Ignoring blank search submit");
                    return false;
                }
                self.start_search(query, state, dispatcher);
                false
            }

            SearchAction::LoadNextPage => {
                if let Some(next) = state.search.next_key {
                    if !state.search.is_loading {
                        self.load_key(next, dispatcher);
                    }
                }
                false
            }

            SearchAction::LoadPrevPage => {
                if let Some(prev) = state.search.prev_key {
                    if !state.search.is_loading {
                        self.load_key(prev, dispatcher);
                    }
                }
                false
            }

            SearchAction::Refresh => {
                let Some(generation) = self.session.as_ref().map(|s| s.generation) else {
                    return false;
                };
                let key = state
                    .search
                    .paging_snapshot()
                    .refresh_key()
                    .unwrap_or(FIRST_PAGE);
                log::info!("Refreshing {:?} from page {}", state.search.query, key);
                dispatcher.dispatch(Action::Search(SearchAction::RefreshStarted {
                    generation,
                    key,
                }));
                self.load_key(key, dispatcher);
                false
            }

            // Scroll-driven prefetch: approaching the loaded end pulls
            // the next page, hitting the loaded start pulls the previous
            // one. The navigation itself still goes to the reducer.
            SearchAction::NavigateNext | SearchAction::NavigateToBottom => {
                if state.search.next_key.is_some()
                    && state.search.near_end(PREFETCH_THRESHOLD)
                    && !state.search.is_loading
                {
                    dispatcher.dispatch(Action::Search(SearchAction::LoadNextPage));
                }
                true
            }

            SearchAction::NavigatePrevious | SearchAction::NavigateToTop => {
                if state.search.prev_key.is_some()
                    && state.search.selected == 0
                    && !state.search.is_loading
                {
                    dispatcher.dispatch(Action::Search(SearchAction::LoadPrevPage));
                }
                true
            }

            SearchAction::OpenInBrowser => {
                if let Some(repo) = state.search.selected_repository() {
                    if !repo.is_end_of_list() && !repo.repository_url.is_empty() {
                        log::info!("Opening {} in browser", repo.repository_name);
                        self.runtime.spawn(open_url(repo.repository_url.clone()));
                    }
                }
                false
            }

            _ => true,
        }
    }
}
