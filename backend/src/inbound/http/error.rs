//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while giving browsers a
//! sensible response for every failure. Missing authentication becomes a
//! redirect to the login form; everything else renders an HTML error page.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

use super::views::{HtmlPages, PageRenderer};

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::SEE_OTHER,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Title and user-facing message for the error page.
///
/// Infrastructure failures are replaced with fixed text; their details only
/// reach the logs.
fn public_text(error: &Error) -> (&'static str, &str) {
    match error.code() {
        ErrorCode::InvalidRequest => ("Bad request", error.message()),
        ErrorCode::Conflict => ("Conflict", error.message()),
        ErrorCode::Unauthorized => ("Login required", "Please log in."),
        ErrorCode::NotFound => ("Not found", "The page you asked for does not exist."),
        ErrorCode::ServiceUnavailable => (
            "Service unavailable",
            "The service is temporarily unavailable. Please try again shortly.",
        ),
        ErrorCode::InternalError => ("Internal server error", "Internal server error"),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let trace_id = self.trace_id().unwrap_or_default();
        match self.code() {
            ErrorCode::InternalError => {
                error!(trace_id, message = self.message(), "request failed");
            }
            ErrorCode::ServiceUnavailable => {
                warn!(trace_id, message = self.message(), "dependency unavailable");
            }
            _ => {}
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        match self.code() {
            ErrorCode::Unauthorized => builder
                .insert_header((header::LOCATION, LOGIN_PATH))
                .finish(),
            ErrorCode::NotFound => builder
                .content_type(ContentType::html())
                .body(HtmlPages.not_found()),
            _ => {
                let (title, message) = public_text(self);
                builder
                    .content_type(ContentType::html())
                    .body(HtmlPages.error(title, message))
            }
        }
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Self::internal("Internal server error")
    }
}
