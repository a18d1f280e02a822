//! Repository domain model

use gh_search_client::RepoModel;

/// Reserved id for the synthetic end-of-results row
pub const END_OF_LIST_ID: u64 = u64::MAX;

/// One search result, shaped for display
///
/// Immutable after construction. Identity is stable by `id` across
/// reloads, so a diffing renderer can match rows between pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub id: u64,
    pub owner_avatar: String,
    pub owner_name: String,
    /// Full "owner/name" slug
    pub repository_name: String,
    /// Short repository name
    pub repository_title: String,
    pub repository_desc: String,
    pub repository_url: String,

    pub language: Option<String>,
    pub license_type: Option<String>,
    pub license_url: Option<String>,
    /// Comma-joined topic list
    pub topics: Option<String>,

    /// Set only on the synthetic row that marks the end of the results
    pub end_of_list_message: Option<String>,
}

impl Repository {
    /// Build the sentinel row appended when the upstream reports a soft
    /// pagination boundary.
    pub fn end_of_list(message: impl Into<String>) -> Self {
        Self {
            id: END_OF_LIST_ID,
            owner_avatar: String::new(),
            owner_name: String::new(),
            repository_name: String::new(),
            repository_title: String::new(),
            repository_desc: String::new(),
            repository_url: String::new(),
            language: None,
            license_type: None,
            license_url: None,
            topics: None,
            end_of_list_message: Some(message.into()),
        }
    }

    pub fn is_end_of_list(&self) -> bool {
        self.end_of_list_message.is_some()
    }
}

impl From<&RepoModel> for Repository {
    fn from(model: &RepoModel) -> Self {
        let (owner_name, owner_avatar) = model
            .owner
            .as_ref()
            .map(|o| (o.login.clone(), o.avatar_url.clone()))
            .unwrap_or_default();

        Self {
            id: model.id,
            owner_avatar,
            owner_name,
            repository_name: model
                .full_name
                .clone()
                .unwrap_or_else(|| model.name.clone()),
            repository_title: model.name.clone(),
            repository_desc: model.description.clone().unwrap_or_default(),
            repository_url: model.html_url.clone(),
            language: model.language.clone(),
            license_type: model.license.as_ref().map(|l| l.name.clone()),
            license_url: model.license.as_ref().and_then(|l| l.url.clone()),
            topics: if model.topics.is_empty() {
                None
            } else {
                Some(model.topics.join(", "))
            },
            end_of_list_message: None,
        }
    }
}
