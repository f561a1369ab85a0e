//! Path parameter extractor
//!
//! `ApiPath<T>` works like `axum::extract::Path<T>`, but an unparsable
//! segment (`/v1/endereco/abc`) is answered with a 400 in the usual
//! `ApiResponse` envelope instead of axum's plain-text rejection.

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::ApiResponse;

pub struct ApiPath<T>(pub T);

pub struct ApiPathRejection(PathRejection);

impl IntoResponse for ApiPathRejection {
    fn into_response(self) -> Response {
        let message = format!("Invalid path: {}", self.0.body_text());
        debug!("Rejected request path: {}", message);
        (StatusCode::BAD_REQUEST, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiPathRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(ApiPathRejection)?;
        Ok(ApiPath(value))
    }
}
