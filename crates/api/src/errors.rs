//! HTTP error mapping
//!
//! Every failure leaves a handler as `{"message": "..."}` with a status
//! derived from the domain error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use linkfolio_domain::LinkfolioError;
use serde::Serialize;
use tracing::error;

/// Error returned by handlers
#[derive(Debug)]
pub enum ApiError {
    Domain(LinkfolioError),
    /// Request body exceeded `server.max_body_bytes`.
    PayloadTooLarge(String),
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Domain(LinkfolioError::InvalidInput(_) | LinkfolioError::Conflict(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Domain(LinkfolioError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Domain(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Domain(err) => err.message(),
            Self::PayloadTooLarge(msg) => msg,
        }
    }

    /// Domain error behind this response, if any.
    pub fn domain(&self) -> Option<&LinkfolioError> {
        match self {
            Self::Domain(err) => Some(err),
            Self::PayloadTooLarge(_) => None,
        }
    }
}

impl From<LinkfolioError> for ApiError {
    fn from(value: LinkfolioError) -> Self {
        Self::Domain(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self.message(), "request failed");
        }

        (status, Json(ErrorBody { message: self.message().to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_400_and_404() {
        let cases = [
            (LinkfolioError::InvalidInput("bad".into()), StatusCode::BAD_REQUEST),
            (LinkfolioError::Conflict("taken".into()), StatusCode::BAD_REQUEST),
            (LinkfolioError::NotFound("gone".into()), StatusCode::NOT_FOUND),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }

    #[test]
    fn upstream_errors_map_to_500() {
        for err in [
            LinkfolioError::Upload("rejected".into()),
            LinkfolioError::Database("locked".into()),
            LinkfolioError::Network("timeout".into()),
            LinkfolioError::Config("missing".into()),
            LinkfolioError::Internal("join".into()),
        ] {
            assert_eq!(ApiError::from(err).status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn message_has_no_variant_prefix() {
        let err = ApiError::from(LinkfolioError::Conflict("Username is already taken".into()));
        assert_eq!(err.message(), "Username is already taken");
    }
}
