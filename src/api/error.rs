//! HTML error pages for handler failures

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::domain::DomainError;

use super::views;

/// Error carrying an HTTP status, rendered as a minimal HTML page
#[derive(Debug)]
pub struct PageError {
    pub status: StatusCode,
    pub message: String,
}

impl PageError {
    /// Create a new page error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let body = views::error_page(self.status, &self.message);
        (self.status, Html(body)).into_response()
    }
}

impl From<DomainError> for PageError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::Internal { message } => Self::internal(message),
            DomainError::Storage { message } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for PageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_error_creation() {
        let err = PageError::not_found("User '42' not found");

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "User '42' not found");
    }

    #[test]
    fn test_domain_error_conversion() {
        let not_found: PageError = DomainError::not_found("User '42' not found").into();
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);

        let validation: PageError = DomainError::validation("Missing field").into();
        assert_eq!(validation.status, StatusCode::BAD_REQUEST);

        let storage: PageError = DomainError::storage("Connection refused").into();
        assert_eq!(storage.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display() {
        let err = PageError::internal("boom");
        assert_eq!(err.to_string(), "500 Internal Server Error: boom");
    }
}
