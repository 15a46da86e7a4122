/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / `{"message": ...}` body)
 * - AccessError (platform auth / policy / wiring) を status に振り分ける
 *
 * Status mapping
 * - MissingCredentials / AuthenticationFailed → 500 (kept for compatibility with existing gateways)
 * - AuthorizationDenied → 403
 * - Configuration → 500
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::error::AccessError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Access(#[from] AccessError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Access(AccessError::AuthorizationDenied(_)) => StatusCode::FORBIDDEN,
            AppError::Access(
                AccessError::MissingCredentials
                | AccessError::AuthenticationFailed
                | AccessError::Configuration(_),
            ) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Access(AccessError::Configuration(message)) = &self {
            tracing::error!(%message, "dataporten pipeline is misconfigured");
        }

        let body = ErrorResponse {
            message: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::error::USER_REQUIRED;

    #[test]
    fn status_per_failure_kind() {
        let cases = [
            (AccessError::MissingCredentials, StatusCode::INTERNAL_SERVER_ERROR),
            (AccessError::AuthenticationFailed, StatusCode::INTERNAL_SERVER_ERROR),
            (AccessError::AuthorizationDenied(USER_REQUIRED), StatusCode::FORBIDDEN),
            (AccessError::setup_required(), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }

    #[test]
    fn message_is_the_access_error_text() {
        let err = AppError::from(AccessError::MissingCredentials);
        assert_eq!(err.to_string(), "Missing Authorization header");
    }
}
