//! Application-level error type and its response mapping

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::pages;

/// Shown when a failure carries no usable message
const UNKNOWN_ERROR: &str = "Unknown Error";

/// Application-level error type
///
/// `NotFound` is the one expected outcome: it becomes a 404 and is never
/// logged as an error. Everything else reaches the generic error renderer.
#[derive(Debug)]
pub enum AppError {
    /// The searched login does not exist upstream; carries the user-facing
    /// message
    NotFound(String),
    /// Upstream failure; carries the upstream's message and the searched
    /// login so the error page can keep the search box filled
    Upstream { message: String, query: String },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(message) => write!(f, "Not found: {message}"),
            Self::Upstream { message, .. } => write!(f, "Upstream error: {message}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::NotFound(message) => HttpResponse::NotFound()
                .content_type(ContentType::plaintext())
                .body(message.clone()),

            Self::Upstream { message, query } => {
                let shown = if message.is_empty() {
                    tracing::error!("upstream failure carried no message");
                    UNKNOWN_ERROR
                } else {
                    tracing::error!(%message, "upstream failure");
                    message.as_str()
                };

                HttpResponse::InternalServerError()
                    .content_type(ContentType::html())
                    .body(pages::error_page(shown, Some(query)))
            }
        }
    }
}
