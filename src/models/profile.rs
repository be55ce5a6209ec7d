//! Profile models and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub user profile, normalized from one lookup response.
///
/// Built fresh per request and discarded after the page is rendered;
/// nothing here is cached or persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique handle on GitHub, always present
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub pronouns: Option<String>,
    pub website_url: Option<String>,
    pub twitter_username: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Canonical profile URL
    pub url: String,
    pub followers_count: u32,
    pub following_count: u32,
    pub repositories_count: u32,
    /// Up to 10 entries, descending star count as returned by the upstream
    pub top_repositories: Vec<RepositorySummary>,
}

/// One entry in a user's top-repositories list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub stargazer_count: u32,
    pub fork_count: u32,
    pub primary_language: Option<PrimaryLanguage>,
    /// License name as reported upstream. "Other" carries no display value
    /// and is suppressed at the view layer.
    pub license: Option<String>,
    /// Up to 6 topic names
    pub topics: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

/// Primary language of a repository with its display color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryLanguage {
    pub name: String,
    pub color: Option<String>,
}
