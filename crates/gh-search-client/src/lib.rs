//! GitHub repository search client
//!
//! This crate provides a trait-based client for the GitHub repository
//! search endpoint. The trait keeps the application testable: production
//! code talks to `OctocrabSearchClient`, tests substitute fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │              SearchClient trait            │
//! │  - search_repositories(query, per, page)   │
//! └────────────────────────────────────────────┘
//!                       │
//!                       ▼
//!            ┌──────────────────────┐
//!            │ OctocrabSearchClient │
//!            │ (direct API)         │
//!            └──────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_search_client::{OctocrabSearchClient, SearchClient};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let octocrab = octocrab::Octocrab::builder()
//!     .personal_token("token".to_string())
//!     .build()?;
//!
//! let client = OctocrabSearchClient::new(Arc::new(octocrab));
//! let response = client.search_repositories("ratatui", 30, 1).await?;
//! println!("{} repositories", response.total_count);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod octocrab_client;
pub mod token;
pub mod types;

pub use client::SearchClient;
pub use error::{ApiErrorBody, SearchError};
pub use octocrab_client::OctocrabSearchClient;
pub use token::resolve_token;
pub use types::{LicenseModel, OwnerModel, RepoModel, SearchResponse};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
