//! Shared test fixtures
//!
//! A scripted `SearchClient` fake plus response builders, used by the
//! use-case and pager tests.

use async_trait::async_trait;
use gh_search_client::{OwnerModel, RepoModel, SearchClient, SearchError, SearchResponse};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scripted search client: answers calls from a queue of canned results
/// and records the parameters of every call.
pub struct FakeSearchClient {
    responses: Mutex<VecDeque<Result<SearchResponse, SearchError>>>,
    calls: Arc<Mutex<Vec<(String, u8, u32)>>>,
}

impl FakeSearchClient {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue the result for the next unanswered call
    pub fn with_response(self, response: Result<SearchResponse, SearchError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Handle to the recorded `(query, per_page, page)` calls
    pub fn calls(&self) -> Arc<Mutex<Vec<(String, u8, u32)>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl SearchClient for FakeSearchClient {
    async fn search_repositories(
        &self,
        query: &str,
        per_page: u8,
        page: u32,
    ) -> Result<SearchResponse, SearchError> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), per_page, page));

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(SearchError::Transport("no scripted response".to_string())))
    }
}

/// One plausible search item with the given id
pub fn repo_model(id: u64) -> RepoModel {
    RepoModel {
        id,
        name: format!("repo-{}", id),
        full_name: Some(format!("octocat/repo-{}", id)),
        owner: Some(OwnerModel {
            login: "octocat".to_string(),
            avatar_url: "https://avatars.githubusercontent.com/u/1".to_string(),
        }),
        description: Some(format!("description {}", id)),
        html_url: format!("https://github.com/octocat/repo-{}", id),
        language: Some("Rust".to_string()),
        license: None,
        topics: vec![],
    }
}

/// A success body with `count` items whose ids start at `first_id`
pub fn response_with(total_count: u64, count: usize, first_id: u64) -> SearchResponse {
    SearchResponse {
        total_count,
        incomplete_results: false,
        items: (0..count as u64).map(|i| repo_model(first_id + i)).collect(),
    }
}
