//! Unified error handling with Sentry integration.
//!
//! Every handler returns `Result<T, AppError>`. Errors render as the
//! envelope `{"status":"error","message":...}`. Server faults are captured to
//! Sentry and logged with their cause; the client only ever sees the generic
//! localized message attached to the variant.

use std::error::Error as StdError;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use thiserror::Error;

use lunev_shop_core::ResponseStatus;

use crate::messages;
use crate::services::auth::AuthError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Required input missing or malformed (400).
    #[error("Validation failed: {0}")]
    Validation(&'static str),

    /// Resource not found (404).
    #[error("Not found: {0}")]
    NotFound(&'static str),

    /// Registration or login failed: duplicate email (400), unknown user or
    /// wrong password (401), or a backend fault (500).
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Unexpected backend fault (500). `message` is what the client sees.
    #[error("{message}: {source}")]
    Internal {
        message: &'static str,
        #[source]
        source: BoxError,
    },

    /// Backend fault on a list endpoint (500). The envelope also carries an
    /// empty list under `key` so clients can render an empty state.
    #[error("{message}: {source}")]
    ListUnavailable {
        key: &'static str,
        message: &'static str,
        #[source]
        source: BoxError,
    },
}

impl AppError {
    /// Adapter for `map_err` that wraps a backend error as `Internal`.
    pub fn internal<E>(message: &'static str) -> impl FnOnce(E) -> Self
    where
        E: Into<BoxError>,
    {
        move |source| Self::Internal {
            message,
            source: source.into(),
        }
    }

    /// Adapter for `map_err` that wraps a backend error as `ListUnavailable`.
    pub fn list_unavailable<E>(key: &'static str, message: &'static str) -> impl FnOnce(E) -> Self
    where
        E: Into<BoxError>,
    {
        move |source| Self::ListUnavailable {
            key,
            message,
            source: source.into(),
        }
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Auth(err) => match err {
                AuthError::UserNotFound | AuthError::InvalidCredentials => {
                    StatusCode::UNAUTHORIZED
                }
                AuthError::UserAlreadyExists => StatusCode::BAD_REQUEST,
                AuthError::Repository(_) | AuthError::PasswordHash(_) | AuthError::HashTask(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Internal { .. } | Self::ListUnavailable { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to the client. Never includes the underlying cause.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::Validation(msg)
            | Self::NotFound(msg)
            | Self::Internal { message: msg, .. }
            | Self::ListUnavailable { message: msg, .. } => *msg,
            Self::Auth(err) => match err {
                AuthError::UserNotFound => messages::USER_NOT_FOUND,
                AuthError::InvalidCredentials => messages::WRONG_PASSWORD,
                AuthError::UserAlreadyExists => messages::EMAIL_TAKEN,
                AuthError::Repository(_) | AuthError::PasswordHash(_) | AuthError::HashTask(_) => {
                    messages::INTERNAL_ERROR
                }
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let mut body = Map::new();
        body.insert(
            "status".to_string(),
            Value::from(ResponseStatus::Error.as_str()),
        );
        body.insert("message".to_string(), Value::from(self.public_message()));
        if let Self::ListUnavailable { key, .. } = &self {
            body.insert((*key).to_string(), Value::Array(Vec::new()));
        }

        (status, Json(Value::Object(body))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::db::RepositoryError;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound(messages::PRODUCT_NOT_FOUND);
        assert_eq!(err.to_string(), "Not found: Товар не найден");
    }

    #[tokio::test]
    async fn test_validation_envelope() {
        let (status, body) = render(AppError::Validation(messages::PARAMS_REQUIRED)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"status": "error", "message": messages::PARAMS_REQUIRED})
        );
    }

    #[tokio::test]
    async fn test_login_failures_are_401_with_distinct_messages() {
        let (not_found, body_a) = render(AppError::Auth(AuthError::UserNotFound)).await;
        let (wrong_pw, body_b) = render(AppError::Auth(AuthError::InvalidCredentials)).await;
        assert_eq!(not_found, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_pw, StatusCode::UNAUTHORIZED);
        assert_ne!(body_a["message"], body_b["message"]);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_400() {
        let (status, body) = render(AppError::Auth(AuthError::UserAlreadyExists)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], messages::EMAIL_TAKEN);
    }

    #[tokio::test]
    async fn test_internal_hides_cause() {
        let source = RepositoryError::Conflict("secret table detail".to_string());
        let err = AppError::internal(messages::CART_ADD_FAILED)(source);
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], messages::CART_ADD_FAILED);
        assert!(!body.to_string().contains("secret table detail"));
    }

    #[tokio::test]
    async fn test_auth_backend_fault_is_generic_500() {
        let source = RepositoryError::Database(sqlx::Error::PoolTimedOut);
        let err = AppError::Auth(AuthError::Repository(source));
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], messages::INTERNAL_ERROR);
    }

    #[tokio::test]
    async fn test_list_unavailable_carries_empty_list() {
        let err = AppError::list_unavailable("cart", messages::CART_FETCH_FAILED)(
            RepositoryError::Database(sqlx::Error::PoolTimedOut),
        );
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"status": "error", "message": messages::CART_FETCH_FAILED, "cart": []})
        );
    }
}
