//! Domain failure to HTTP response translation

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, error, warn};

use super::ApiResponse;
use crate::domain::DomainError;

/// Handler error carrying a [`DomainError`] to the HTTP boundary.
///
/// `NotFound` → 404, `Conflict` → 409, `Storage` → 500.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Conflict(_) => StatusCode::CONFLICT,
            DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.0.to_string();

        match &self.0 {
            DomainError::Storage(_) => error!(status = status.as_u16(), "{}", message),
            DomainError::Conflict(_) => warn!(status = status.as_u16(), "{}", message),
            DomainError::NotFound { .. } => debug!(status = status.as_u16(), "{}", message),
        }

        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}
