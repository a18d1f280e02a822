//! Repository search use case
//!
//! Issues one remote search call and classifies the outcome into a
//! [`Resource`]. Each invocation resolves to exactly one value; there are
//! no retries and no caching at this layer.

use crate::domain::Resource;
use gh_search_client::{SearchClient, SearchError, SearchResponse};
use std::sync::Arc;

/// Classifies one search call into a `Resource<SearchResponse>`
///
/// Status mapping:
/// - 2xx with a body → `Success`
/// - 403/422 with a decoded error body → `EndOfList` (GitHub reports the
///   search result window and rate limits this way; both are soft
///   pagination boundaries, not failures)
/// - any other 4xx with a decoded body → `Error` with the same message
/// - 4xx without a decodable body → `Error` naming the status code
/// - anything else (5xx, transport, decode, empty body) → `Error` with
///   the failure's display text
#[derive(Clone)]
pub struct SearchRepositoriesUseCase {
    client: Arc<dyn SearchClient>,
}

impl SearchRepositoriesUseCase {
    pub fn new(client: Arc<dyn SearchClient>) -> Self {
        Self { client }
    }

    /// Run one search. `page` is 1-based.
    pub async fn call(&self, query: &str, per_page: u8, page: u32) -> Resource<SearchResponse> {
        match self.client.search_repositories(query, per_page, page).await {
            Ok(body) => Resource::Success(body),

            Err(SearchError::Status {
                status: 403 | 422,
                body: Some(body),
                ..
            }) => Resource::end_of_list(body.display_message()),

            Err(SearchError::Status {
                status,
                body: Some(body),
                ..
            }) if (400..500).contains(&status) => {
                log::warn!("Search rejected with HTTP {}: {}", status, body.message);
                Resource::error(body.display_message())
            }

            Err(SearchError::Status {
                status, body: None, ..
            }) if (400..500).contains(&status) => {
                Resource::error(format!("Undecodable error body on HTTP {}", status))
            }

            Err(err) => {
                log::warn!("Search failed: {}", err);
                Resource::error(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{response_with, FakeSearchClient};
    use gh_search_client::ApiErrorBody;

    fn use_case(client: FakeSearchClient) -> SearchRepositoriesUseCase {
        SearchRepositoriesUseCase::new(Arc::new(client))
    }

    fn window_body() -> ApiErrorBody {
        ApiErrorBody {
            message: "Only the first 1000 search results are available".to_string(),
            documentation_url: Some("https://docs.github.com/v3/search/".to_string()),
        }
    }

    #[tokio::test]
    async fn test_success_wraps_body() {
        let client = FakeSearchClient::new().with_response(Ok(response_with(60, 30, 0)));
        let resource = use_case(client).call("kotlin", 30, 1).await;

        match resource {
            Resource::Success(body) => {
                assert_eq!(body.total_count, 60);
                assert_eq!(body.items.len(), 30);
            }
            other => panic!("expected Success, got {:?}", other.message()),
        }
    }

    #[tokio::test]
    async fn test_422_with_decodable_body_is_end_of_list() {
        let client = FakeSearchClient::new().with_response(Err(SearchError::Status {
            status: 422,
            reason: "Unprocessable Entity".to_string(),
            body: Some(window_body()),
        }));
        let resource = use_case(client).call("kotlin", 30, 35).await;

        match resource {
            Resource::EndOfList { message, .. } => assert_eq!(
                message,
                "Only the first 1000 search results are available\nhttps://docs.github.com/v3/search/"
            ),
            other => panic!("expected EndOfList, got {:?}", other.message()),
        }
    }

    #[tokio::test]
    async fn test_403_with_decodable_body_is_end_of_list() {
        let client = FakeSearchClient::new().with_response(Err(SearchError::Status {
            status: 403,
            reason: "Forbidden".to_string(),
            body: Some(ApiErrorBody {
                message: "API rate limit exceeded".to_string(),
                documentation_url: None,
            }),
        }));
        let resource = use_case(client).call("rust", 30, 2).await;

        match resource {
            Resource::EndOfList { message, .. } => {
                assert_eq!(message, "API rate limit exceeded");
            }
            other => panic!("expected EndOfList, got {:?}", other.message()),
        }
    }

    #[tokio::test]
    async fn test_other_4xx_with_body_is_error() {
        let client = FakeSearchClient::new().with_response(Err(SearchError::Status {
            status: 400,
            reason: "Bad Request".to_string(),
            body: Some(ApiErrorBody {
                message: "Problems parsing JSON".to_string(),
                documentation_url: Some("https://docs.github.com".to_string()),
            }),
        }));
        let resource = use_case(client).call("rust", 30, 1).await;

        match resource {
            Resource::Error { message, .. } => {
                assert_eq!(message, "Problems parsing JSON\nhttps://docs.github.com");
            }
            other => panic!("expected Error, got {:?}", other.message()),
        }
    }

    #[tokio::test]
    async fn test_undecodable_client_error_names_the_status() {
        let client = FakeSearchClient::new().with_response(Err(SearchError::Status {
            status: 422,
            reason: "Unprocessable Entity".to_string(),
            body: None,
        }));
        let resource = use_case(client).call("rust", 30, 1).await;

        match resource {
            Resource::Error { message, .. } => assert!(message.contains("422"), "{}", message),
            other => panic!("expected Error, got {:?}", other.message()),
        }
    }

    #[tokio::test]
    async fn test_server_error_uses_reason_phrase() {
        let client = FakeSearchClient::new().with_response(Err(SearchError::Status {
            status: 500,
            reason: "Internal Server Error".to_string(),
            body: None,
        }));
        let resource = use_case(client).call("rust", 30, 1).await;

        assert_eq!(
            resource.message(),
            Some("HTTP 500 Internal Server Error")
        );
    }

    #[tokio::test]
    async fn test_transport_failure_is_error() {
        let client = FakeSearchClient::new()
            .with_response(Err(SearchError::Transport("connection refused".to_string())));
        let resource = use_case(client).call("rust", 30, 1).await;

        match resource {
            Resource::Error { message, .. } => assert_eq!(message, "connection refused"),
            other => panic!("expected Error, got {:?}", other.message()),
        }
    }

    #[tokio::test]
    async fn test_empty_body_is_error() {
        let client = FakeSearchClient::new().with_response(Err(SearchError::EmptyBody));
        let resource = use_case(client).call("rust", 30, 1).await;

        assert_eq!(resource.message(), Some("empty response body"));
    }

    #[tokio::test]
    async fn test_forwards_paging_parameters() {
        let client = FakeSearchClient::new().with_response(Ok(response_with(0, 0, 0)));
        let calls = client.calls();
        use_case(client).call("tokio stars:>100", 30, 4).await;

        let recorded = calls.lock().unwrap();
        assert_eq!(*recorded, vec![("tokio stars:>100".to_string(), 30u8, 4u32)]);
    }
}
