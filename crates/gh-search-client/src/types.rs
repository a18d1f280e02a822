//! GitHub search API data transfer objects
//!
//! These types mirror the wire format of `GET /search/repositories`.
//! They are intentionally separate from application domain models to
//! keep this crate pure and reusable.

use serde::{Deserialize, Serialize};

/// Successful response body of the repository search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Total number of repositories matching the query (across all pages)
    pub total_count: u64,

    /// Whether the search timed out before scanning everything
    #[serde(default)]
    pub incomplete_results: bool,

    /// The repositories on this page
    pub items: Vec<RepoModel>,
}

/// One repository as returned by the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoModel {
    /// Numeric repository id (stable across renames)
    pub id: u64,

    /// Short repository name (e.g., "ripgrep")
    pub name: String,

    /// Full "owner/name" slug
    #[serde(default)]
    pub full_name: Option<String>,

    /// Owning user or organization
    #[serde(default)]
    pub owner: Option<OwnerModel>,

    /// Repository description
    #[serde(default)]
    pub description: Option<String>,

    /// Web URL of the repository
    #[serde(default)]
    pub html_url: String,

    /// Primary language, if GitHub detected one
    #[serde(default)]
    pub language: Option<String>,

    /// License metadata, if any
    #[serde(default)]
    pub license: Option<LicenseModel>,

    /// Repository topics
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Repository owner (user or organization)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerModel {
    /// Login name
    pub login: String,

    /// Avatar image URL
    #[serde(default)]
    pub avatar_url: String,
}

/// License metadata attached to a repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseModel {
    /// Human-readable license name (e.g., "MIT License")
    pub name: String,

    /// API URL with the license text, if the license is a known one
    #[serde(default)]
    pub url: Option<String>,
}
