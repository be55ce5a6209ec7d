//! View-model derivation
//!
//! Pure, synchronous shaping of a [`UserProfile`] into the strings the pages
//! render. No I/O here: same profile in, same view out.

use chrono::{DateTime, Utc};

use crate::models::{PrimaryLanguage, RepositorySummary, UserProfile};

/// License name the upstream uses for unrecognized licenses. Carries no
/// display value and is suppressed.
const OTHER_LICENSE: &str = "Other";

/// Display data for one profile page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub login: String,
    /// `name` when present and non-empty, otherwise `@login`
    pub display_name: String,
    pub pronouns: Option<String>,
    pub avatar_url: String,
    pub profile_url: String,
    /// Account creation date as a long calendar date
    pub joined_on: String,
    pub repositories_stat: String,
    pub followers_stat: String,
    pub following_stat: String,
    pub email: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub website_url: Option<String>,
    pub twitter_username: Option<String>,
    pub bio: Option<String>,
    pub repositories: Vec<RepoLine>,
}

/// Display data for one repository entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLine {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub language: Option<PrimaryLanguage>,
    pub topics: Vec<String>,
    /// Formatted count plus noun, singular iff the count is exactly 1
    pub stars_label: String,
    pub forks_label: String,
    /// Suppressed when absent or named "Other"
    pub license: Option<String>,
    /// Last-updated date as a medium calendar date
    pub updated_on: String,
}

impl ProfileView {
    pub fn from_profile(profile: &UserProfile) -> Self {
        let display_name = profile
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(String::from)
            .unwrap_or_else(|| format!("@{}", profile.login));

        Self {
            login: profile.login.clone(),
            display_name,
            pronouns: profile.pronouns.clone(),
            avatar_url: profile.avatar_url.clone(),
            profile_url: profile.url.clone(),
            joined_on: long_date(&profile.created_at),
            repositories_stat: format_decimal(profile.repositories_count),
            followers_stat: format_decimal(profile.followers_count),
            following_stat: format_decimal(profile.following_count),
            email: profile.email.clone(),
            location: profile.location.clone(),
            company: profile.company.clone(),
            website_url: profile.website_url.clone(),
            twitter_username: profile.twitter_username.clone(),
            bio: profile.bio.clone(),
            repositories: profile.top_repositories.iter().map(RepoLine::from_summary).collect(),
        }
    }
}

impl RepoLine {
    fn from_summary(repo: &RepositorySummary) -> Self {
        Self {
            name: repo.name.clone(),
            url: repo.url.clone(),
            description: repo.description.clone(),
            language: repo.primary_language.clone(),
            topics: repo.topics.clone(),
            stars_label: count_label(repo.stargazer_count, "star"),
            forks_label: count_label(repo.fork_count, "fork"),
            license: repo
                .license
                .as_deref()
                .filter(|name| *name != OTHER_LICENSE)
                .map(String::from),
            updated_on: medium_date(&repo.updated_at),
        }
    }
}

/// Format a count as a decimal string with thousands separators
pub fn format_decimal(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Formatted count plus pluralized noun: `1 star`, `2 stars`, `0 forks`
fn count_label(count: u32, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{} {noun}{suffix}", format_decimal(count))
}

/// Long calendar date: `March 2, 2011`
fn long_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%B %-d, %Y").to_string()
}

/// Medium calendar date: `Mar 2, 2011`
fn medium_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}
