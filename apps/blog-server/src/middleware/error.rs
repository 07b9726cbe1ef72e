//! Error handling - RFC 7807 JSON for the API, an HTML page for missing posts.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use askama::Template;
use quill_core::DomainError;
use quill_core::ports::AuthError;
use quill_shared::ErrorResponse;

use crate::views::NotFoundTemplate;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing resource on the JSON API.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing post on an HTML page.
    #[error("Page not found")]
    PageNotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::PageNotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(detail) => {
                HttpResponse::build(self.status_code()).json(ErrorResponse::not_found(detail))
            }
            AppError::PageNotFound => {
                let body = NotFoundTemplate::default()
                    .render()
                    .unwrap_or_else(|_| "Not Found".to_string());
                HttpResponse::build(self.status_code())
                    .content_type(ContentType::html())
                    .body(body)
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                HttpResponse::build(self.status_code()).json(ErrorResponse::internal_error())
            }
        }
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Internal(format!("template rendering failed: {err}"))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_not_found_maps_to_404() {
        let err: AppError = DomainError::NotFound {
            entity_type: "Post",
            id: uuid::Uuid::nil(),
        }
        .into();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_other_domain_errors_are_internal() {
        let err: AppError = DomainError::Internal("db down".to_string()).into();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
