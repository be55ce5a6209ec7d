//! Lookup seam
//!
//! The entry point talks to the upstream through this trait so HTTP tests
//! can substitute a double for the live GraphQL client.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::UserProfile;

/// Errors that can occur during a user lookup
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    /// The upstream explicitly reports that no user exists for the login.
    /// An expected outcome, not a fault.
    #[error("user not found")]
    NotFound,

    /// Any other upstream failure, carrying the upstream's message
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

/// Looks up a user profile by login against the upstream.
///
/// Implementations perform exactly one attempt per call: no retries, no
/// caching between calls. The login is expected to be trimmed and non-empty;
/// callers own that validation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn user_by_login(&self, login: &str) -> Result<UserProfile, LookupError>;
}
