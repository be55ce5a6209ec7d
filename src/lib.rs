//! GitPeek - server-rendered GitHub profile lookup
//!
//! One route, one outbound GraphQL query per request: look up a user by
//! login and render their profile and top repositories.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pages;
pub mod services;
pub mod view;

pub use config::Config;
pub use error::AppError;
pub use models::{PrimaryLanguage, RepositorySummary, UserProfile};
pub use services::{GithubClient, LookupError, UserLookup};

/// Application state shared across handlers
///
/// The lookup sits behind a trait object so tests can substitute a double.
pub struct AppState {
    pub lookup: Arc<dyn UserLookup>,
}
