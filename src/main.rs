use std::sync::Arc;
use std::time::Duration;

use actix_web::{middleware, web, App, HttpServer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gitpeek::handlers::configure_profile_routes;
use gitpeek::{AppState, Config, GithubClient, UserLookup};

/// Timeout for the outbound GraphQL call
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gitpeek=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; a missing GITHUB_API_TOKEN refuses to start
    let config = Config::from_env().expect("Failed to load configuration");

    info!("Starting GitPeek server on {}:{}", config.host, config.port);

    let http = reqwest::Client::builder()
        .user_agent(format!("gitpeek/{}", env!("CARGO_PKG_VERSION")))
        .timeout(UPSTREAM_TIMEOUT)
        .build()
        .expect("Failed to build HTTP client");

    let lookup: Arc<dyn UserLookup> = Arc::new(GithubClient::new(
        http,
        config.github_token.clone(),
        config.graphql_url.clone(),
    ));

    let app_state = web::Data::new(AppState { lookup });

    let server_addr = format!("{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(configure_profile_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
