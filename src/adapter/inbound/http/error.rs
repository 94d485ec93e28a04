//! Mapping of crate errors onto HTTP error pages.

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use tracing::error;

use super::view;
use crate::domain::DomainError;
use crate::error::Error as AppError;

/// Handler error rendered as an HTML page.
///
/// Validation failures and undecodable forms become 400 with their message,
/// unknown ids 404, and everything else a generic 500 whose details only
/// reach the log.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error(transparent)]
    App(#[from] AppError),

    /// The form body could not be decoded.
    #[error("invalid form submission: {0}")]
    Form(String),

    /// A path segment did not match its route, such as a non-numeric id.
    #[error("nothing found at {0}")]
    Path(String),
}

impl From<DomainError> for HttpError {
    fn from(err: DomainError) -> Self {
        Self::App(AppError::Domain(err))
    }
}

impl ResponseError for HttpError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::App(AppError::Domain(_)) | Self::Form(_) => StatusCode::BAD_REQUEST,
            Self::App(AppError::NotFound { .. }) | Self::Path(_) => StatusCode::NOT_FOUND,
            Self::App(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let page = match self {
            Self::App(AppError::Domain(err)) => view::error_page("Invalid todo", &err.to_string()),
            Self::Form(_) => view::error_page("Invalid todo", &self.to_string()),
            Self::App(AppError::NotFound { .. }) | Self::Path(_) => {
                view::error_page("Not found", &self.to_string())
            }
            Self::App(other) => {
                error!(error = %other, "request failed");
                view::error_page("Something went wrong", "The request could not be completed.")
            }
        };

        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(page)
    }
}
