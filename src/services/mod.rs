pub mod github;
pub mod lookup;

pub use github::GithubClient;
pub use lookup::{LookupError, UserLookup};
