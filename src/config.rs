use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub API bearer token, read once at startup
    pub github_token: String,
    /// GitHub GraphQL endpoint URL
    pub graphql_url: String,
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
}

/// Default GraphQL endpoint when GITHUB_GRAPHQL_URL is not set
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

impl Config {
    /// Load configuration from environment variables
    ///
    /// A missing GITHUB_API_TOKEN is a fatal startup condition: the process
    /// must refuse to serve any request without it.
    pub fn from_env() -> Result<Self, ConfigError> {
        let github_token = env::var("GITHUB_API_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingEnvVar("GITHUB_API_TOKEN"))?;

        let graphql_url =
            env::var("GITHUB_GRAPHQL_URL").unwrap_or_else(|_| DEFAULT_GRAPHQL_URL.to_string());

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT"))?;

        Ok(Self {
            github_token,
            graphql_url,
            host,
            port,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
