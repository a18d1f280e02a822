//! Octocrab-based search client
//!
//! Direct implementation of the `SearchClient` trait using the octocrab
//! library. This client makes real API calls; errors are normalized into
//! the crate's [`SearchError`] taxonomy.

use crate::client::SearchClient;
use crate::error::{ApiErrorBody, SearchError};
use crate::types::{LicenseModel, OwnerModel, RepoModel, SearchResponse};
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use std::sync::Arc;

/// Direct GitHub search client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabSearchClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabSearchClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

#[async_trait]
impl SearchClient for OctocrabSearchClient {
    async fn search_repositories(
        &self,
        query: &str,
        per_page: u8,
        page: u32,
    ) -> Result<SearchResponse, SearchError> {
        debug!("Searching repositories: q={:?} per_page={} page={}", query, per_page, page);

        let result = self
            .octocrab
            .search()
            .repositories(query)
            .per_page(per_page)
            .page(page)
            .send()
            .await
            .map_err(convert_error)?;

        let response = SearchResponse {
            total_count: result.total_count.unwrap_or_default(),
            incomplete_results: result.incomplete_results.unwrap_or_default(),
            items: result.items.iter().map(convert_repository).collect(),
        };

        debug!(
            "Search returned {} of {} repositories for q={:?}",
            response.items.len(),
            response.total_count,
            query
        );
        Ok(response)
    }
}

/// Convert an octocrab repository model to our RepoModel
fn convert_repository(repo: &octocrab::models::Repository) -> RepoModel {
    RepoModel {
        id: repo.id.0,
        name: repo.name.clone(),
        full_name: repo.full_name.clone(),
        owner: repo.owner.as_ref().map(|owner| OwnerModel {
            login: owner.login.clone(),
            avatar_url: owner.avatar_url.to_string(),
        }),
        description: repo.description.clone(),
        html_url: repo
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_default(),
        language: repo
            .language
            .as_ref()
            .and_then(|l| l.as_str())
            .map(str::to_owned),
        license: repo.license.as_ref().map(|license| LicenseModel {
            name: license.name.clone(),
            url: license.url.as_ref().map(|u| u.to_string()),
        }),
        topics: repo.topics.clone().unwrap_or_default(),
    }
}

/// Normalize an octocrab error into the crate's error taxonomy
fn convert_error(err: octocrab::Error) -> SearchError {
    match err {
        octocrab::Error::GitHub { source, .. } => SearchError::Status {
            status: source.status_code.as_u16(),
            reason: source
                .status_code
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string(),
            body: Some(ApiErrorBody {
                message: source.message,
                documentation_url: source.documentation_url,
            }),
        },
        octocrab::Error::Serde { source, .. } => SearchError::Decode(source.to_string()),
        octocrab::Error::Json { source, .. } => SearchError::Decode(source.to_string()),
        other => SearchError::Transport(other.to_string()),
    }
}
