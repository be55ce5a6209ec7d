//! GitHub GraphQL client
//!
//! Issues the single profile query against the GitHub GraphQL API and
//! normalizes the response into [`UserProfile`]. One network round trip per
//! lookup; a `NOT_FOUND` error classification from the upstream becomes
//! [`LookupError::NotFound`], every other failure becomes
//! [`LookupError::Upstream`] carrying the upstream's message.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::models::{PrimaryLanguage, RepositorySummary, UserProfile};
use crate::services::lookup::{LookupError, UserLookup};

/// Error classification the upstream uses for a missing entity
const NOT_FOUND_TYPE: &str = "NOT_FOUND";

/// The one query this application sends: the full profile field set plus the
/// top 10 starred, non-archived, non-fork, non-locked, public, owner-owned
/// repositories with up to 6 topics each.
const USER_QUERY: &str = r"
query ($login: String!) {
  user(login: $login) {
    avatarUrl
    bio
    company
    createdAt
    email
    followers {
      totalCount
    }
    following {
      totalCount
    }
    location
    login
    name
    pronouns
    repositories {
      totalCount
    }
    topRepositories: repositories(
      affiliations: OWNER
      first: 10
      isArchived: false
      isFork: false
      isLocked: false
      orderBy: { direction: DESC, field: STARGAZERS }
      ownerAffiliations: OWNER
      privacy: PUBLIC
    ) {
      nodes {
        description
        forkCount
        licenseInfo {
          name
        }
        name
        primaryLanguage {
          color
          name
        }
        repositoryTopics(first: 6) {
          nodes {
            topic {
              name
            }
          }
        }
        stargazerCount
        updatedAt
        url
      }
    }
    twitterUsername
    url
    websiteUrl
  }
}
";

/// GitHub GraphQL client
///
/// Holds the shared HTTP client, the bearer token read at process start, and
/// the endpoint URL.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    token: String,
    endpoint: String,
}

impl GithubClient {
    pub fn new(http: Client, token: String, endpoint: String) -> Self {
        Self {
            http,
            token,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl UserLookup for GithubClient {
    async fn user_by_login(&self, login: &str) -> Result<UserProfile, LookupError> {
        debug!(login, "querying upstream for user profile");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&json!({ "query": USER_QUERY, "variables": { "login": login } }))
            .send()
            .await
            .map_err(|e| LookupError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(upstream_failure(response).await);
        }

        let envelope: GraphqlResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Upstream(format!("failed to parse response: {e}")))?;

        interpret(envelope)
    }
}

/// Turn a non-success HTTP response into an upstream error, preferring the
/// message the upstream put in the body over the bare status code.
async fn upstream_failure(response: Response) -> LookupError {
    let status = response.status();
    let body: Value = response.json().await.unwrap_or_else(|_| json!({}));

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

    LookupError::Upstream(message)
}

/// Classify a decoded GraphQL envelope.
///
/// A `NOT_FOUND`-typed error entry wins over every other error; a null user
/// with no errors is also treated as not found.
fn interpret(envelope: GraphqlResponse) -> Result<UserProfile, LookupError> {
    if !envelope.errors.is_empty() {
        if envelope
            .errors
            .iter()
            .any(|e| e.kind.as_deref() == Some(NOT_FOUND_TYPE))
        {
            return Err(LookupError::NotFound);
        }

        return Err(LookupError::Upstream(envelope.errors[0].message.clone()));
    }

    match envelope.data.and_then(|data| data.user) {
        Some(user) => Ok(user.into()),
        None => Err(LookupError::NotFound),
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<QueryData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueryData {
    user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserNode {
    avatar_url: String,
    bio: Option<String>,
    company: Option<String>,
    created_at: DateTime<Utc>,
    email: Option<String>,
    followers: CountNode,
    following: CountNode,
    location: Option<String>,
    login: String,
    name: Option<String>,
    pronouns: Option<String>,
    repositories: CountNode,
    top_repositories: RepositoryConnection,
    twitter_username: Option<String>,
    url: String,
    website_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CountNode {
    total_count: u32,
}

#[derive(Debug, Deserialize)]
struct RepositoryConnection {
    #[serde(default)]
    nodes: Vec<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode {
    description: Option<String>,
    fork_count: u32,
    license_info: Option<LicenseNode>,
    name: String,
    primary_language: Option<LanguageNode>,
    repository_topics: TopicConnection,
    stargazer_count: u32,
    updated_at: DateTime<Utc>,
    url: String,
}

#[derive(Debug, Deserialize)]
struct LicenseNode {
    name: String,
}

#[derive(Debug, Deserialize)]
struct LanguageNode {
    color: Option<String>,
    name: String,
}

#[derive(Debug, Deserialize)]
struct TopicConnection {
    #[serde(default)]
    nodes: Vec<TopicNode>,
}

#[derive(Debug, Deserialize)]
struct TopicNode {
    topic: TopicName,
}

#[derive(Debug, Deserialize)]
struct TopicName {
    name: String,
}

impl From<UserNode> for UserProfile {
    fn from(node: UserNode) -> Self {
        Self {
            login: node.login,
            name: node.name,
            avatar_url: node.avatar_url,
            bio: node.bio,
            company: node.company,
            location: node.location,
            pronouns: node.pronouns,
            website_url: node.website_url,
            twitter_username: node.twitter_username,
            // The upstream reports a hidden email as an empty string
            email: node.email.filter(|e| !e.is_empty()),
            created_at: node.created_at,
            url: node.url,
            followers_count: node.followers.total_count,
            following_count: node.following.total_count,
            repositories_count: node.repositories.total_count,
            top_repositories: node
                .top_repositories
                .nodes
                .into_iter()
                .take(10)
                .map(RepositorySummary::from)
                .collect(),
        }
    }
}

impl From<RepositoryNode> for RepositorySummary {
    fn from(node: RepositoryNode) -> Self {
        Self {
            name: node.name,
            url: node.url,
            description: node.description,
            stargazer_count: node.stargazer_count,
            fork_count: node.fork_count,
            primary_language: node.primary_language.map(|lang| PrimaryLanguage {
                name: lang.name,
                color: lang.color,
            }),
            license: node.license_info.map(|license| license.name),
            topics: node
                .repository_topics
                .nodes
                .into_iter()
                .take(6)
                .map(|entry| entry.topic.name)
                .collect(),
            updated_at: node.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> GraphqlResponse {
        serde_json::from_str(raw).expect("envelope should decode")
    }

    fn user_envelope() -> GraphqlResponse {
        decode(
            r##"{
                "data": {
                    "user": {
                        "avatarUrl": "https://avatars.githubusercontent.com/u/1500684",
                        "bio": "Making software better",
                        "company": null,
                        "createdAt": "2011-03-02T01:25:37Z",
                        "email": "",
                        "followers": { "totalCount": 33549 },
                        "following": { "totalCount": 151 },
                        "location": "Utah, USA",
                        "login": "kentcdodds",
                        "name": "Kent C. Dodds",
                        "pronouns": "he/him",
                        "repositories": { "totalCount": 589 },
                        "topRepositories": {
                            "nodes": [
                                {
                                    "description": "The library for testing React components",
                                    "forkCount": 1100,
                                    "licenseInfo": { "name": "MIT License" },
                                    "name": "react-testing-library",
                                    "primaryLanguage": { "color": "#f1e05a", "name": "JavaScript" },
                                    "repositoryTopics": {
                                        "nodes": [
                                            { "topic": { "name": "react" } },
                                            { "topic": { "name": "testing" } }
                                        ]
                                    },
                                    "stargazerCount": 19000,
                                    "updatedAt": "2026-01-05T10:00:00Z",
                                    "url": "https://github.com/testing-library/react-testing-library"
                                },
                                {
                                    "description": null,
                                    "forkCount": 1,
                                    "licenseInfo": { "name": "Other" },
                                    "name": "dotfiles",
                                    "primaryLanguage": null,
                                    "repositoryTopics": { "nodes": [] },
                                    "stargazerCount": 1,
                                    "updatedAt": "2025-11-20T08:30:00Z",
                                    "url": "https://github.com/kentcdodds/dotfiles"
                                }
                            ]
                        },
                        "twitterUsername": "kentcdodds",
                        "url": "https://github.com/kentcdodds",
                        "websiteUrl": "https://kentcdodds.com"
                    }
                }
            }"##,
        )
    }

    #[test]
    fn decodes_user_into_profile() {
        let profile = interpret(user_envelope()).expect("profile should decode");

        assert_eq!(profile.login, "kentcdodds");
        assert_eq!(profile.name.as_deref(), Some("Kent C. Dodds"));
        assert_eq!(profile.followers_count, 33549);
        assert_eq!(profile.following_count, 151);
        assert_eq!(profile.repositories_count, 589);
        assert_eq!(profile.top_repositories.len(), 2);

        let first = &profile.top_repositories[0];
        assert_eq!(first.name, "react-testing-library");
        assert_eq!(first.stargazer_count, 19000);
        assert_eq!(first.license.as_deref(), Some("MIT License"));
        assert_eq!(first.topics, vec!["react", "testing"]);
        assert_eq!(
            first.primary_language.as_ref().map(|l| l.name.as_str()),
            Some("JavaScript")
        );
    }

    #[test]
    fn hidden_email_decodes_as_absent() {
        let profile = interpret(user_envelope()).expect("profile should decode");

        assert_eq!(profile.email, None);
    }

    #[test]
    fn license_name_passes_through_verbatim() {
        // Suppressing "Other" is a display rule; the lookup keeps the raw name
        let profile = interpret(user_envelope()).expect("profile should decode");

        assert_eq!(
            profile.top_repositories[1].license.as_deref(),
            Some("Other")
        );
    }

    #[test]
    fn not_found_error_classifies_as_not_found() {
        let envelope = decode(
            r#"{
                "data": { "user": null },
                "errors": [
                    {
                        "type": "NOT_FOUND",
                        "path": ["user"],
                        "message": "Could not resolve to a User with the login of 'nouserhere'."
                    }
                ]
            }"#,
        );

        assert!(matches!(interpret(envelope), Err(LookupError::NotFound)));
    }

    #[test]
    fn other_error_classifies_as_upstream_with_first_message() {
        let envelope = decode(
            r#"{
                "data": null,
                "errors": [
                    { "type": "RATE_LIMITED", "message": "API rate limit exceeded" },
                    { "type": "SOME_OTHER", "message": "second message" }
                ]
            }"#,
        );

        match interpret(envelope) {
            Err(LookupError::Upstream(message)) => {
                assert_eq!(message, "API rate limit exceeded");
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[test]
    fn untyped_error_classifies_as_upstream() {
        let envelope = decode(
            r#"{
                "data": null,
                "errors": [{ "message": "Something went wrong" }]
            }"#,
        );

        match interpret(envelope) {
            Err(LookupError::Upstream(message)) => assert_eq!(message, "Something went wrong"),
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[test]
    fn null_user_without_errors_is_not_found() {
        let envelope = decode(r#"{ "data": { "user": null } }"#);

        assert!(matches!(interpret(envelope), Err(LookupError::NotFound)));
    }
}
