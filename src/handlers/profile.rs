//! Profile handler
//!
//! The single entry point: look up the login carried by `?q=` and render the
//! profile page. Three outcomes per request: redirect to the default login,
//! a 404 naming the searched login, or the rendered page. Upstream failures
//! bubble to the generic error renderer.

use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::pages;
use crate::services::LookupError;
use crate::view::ProfileView;
use crate::AppState;

/// Fallback login used when the request carries no query
const DEFAULT_LOGIN: &str = "kentcdodds";

#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    q: Option<String>,
}

/// GET /
///
/// Query Parameters:
/// - q: the login to search for. Absent or blank redirects to the default.
pub async fn show_profile(
    state: web::Data<AppState>,
    query: web::Query<ProfileQuery>,
) -> Result<HttpResponse, AppError> {
    let login = query.q.as_deref().map(str::trim).unwrap_or_default();

    if login.is_empty() {
        return Ok(HttpResponse::Found()
            .insert_header((header::LOCATION, format!("/?q={DEFAULT_LOGIN}")))
            .finish());
    }

    let profile = state
        .lookup
        .user_by_login(login)
        .await
        .map_err(|e| lookup_failure(login, e))?;

    let view = ProfileView::from_profile(&profile);

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(pages::profile_page(&view)))
}

/// Map lookup errors to application errors
fn lookup_failure(login: &str, error: LookupError) -> AppError {
    match error {
        LookupError::NotFound => {
            AppError::NotFound(format!("No user with the login \"{login}\" exists."))
        }
        LookupError::Upstream(message) => AppError::Upstream {
            message,
            query: login.to_string(),
        },
    }
}

/// Configure profile routes
pub fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(show_profile)));
}
