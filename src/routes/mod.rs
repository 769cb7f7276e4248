// Route exports
pub mod health;
pub mod properties;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::models::ErrorResponse;
use crate::services::{ListingService, PropertyStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub listings: ListingService,
}

impl AppState {
    pub fn new(store: Arc<dyn PropertyStore>) -> Self {
        Self {
            listings: ListingService::new(store),
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure)
        .service(web::scope("/api").configure(properties::configure));
}

/// Error returned by handlers, rendered as a JSON [`ErrorResponse`]
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: &'static str,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: "validation_error",
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: "not_found",
            message: message.into(),
        }
    }

    /// Generic failure; the caller never sees the underlying cause
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: "internal_error",
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for ApiError {}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(ErrorResponse {
            error: self.error.to_string(),
            message: self.message.clone(),
            status_code: self.status.as_u16(),
        })
    }
}

/// Handle query string errors such as a non-numeric `minPrice`
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    ApiError::bad_request(format!("Invalid query: {}", err)).into()
}
