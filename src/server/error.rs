use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::scrape::FetchError;
use crate::storage::StoreError;

/// Error type at the handler boundary.
///
/// Every failure a handler can hit maps to a distinct status code: missing
/// resources are the client's problem, malformed input is the client's
/// problem, a dead upstream is the upstream's, everything else is ours.
/// All bodies are `{"error": "<detail>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no matching article")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error("upstream fetch failed: {0}")]
    Upstream(#[from] FetchError),

    #[error("store operation failed: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "request failed");
        }
        (
            status,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::BadRequest("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Upstream(FetchError::Timeout).status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
