//! Request extractors that reject with the API error envelope.
//!
//! axum's own `Json` and `Path` rejections answer in plain text; these
//! wrappers turn every malformed request into an `AppError::Validation`.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use lunev_shop_core::{ProductId, UserId};

use crate::error::AppError;
use crate::messages;

/// JSON body extractor.
///
/// A missing body, wrong content type, or malformed JSON becomes a 400
/// envelope instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                Err(AppError::Validation(messages::INVALID_JSON))
            }
        }
    }
}

/// Product id from the `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct ProductIdPath(pub ProductId);

impl<S> FromRequestParts<S> for ProductIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Validation(messages::INVALID_PRODUCT_ID))?;
        raw.parse()
            .map(Self)
            .map_err(|_| AppError::Validation(messages::INVALID_PRODUCT_ID))
    }
}

/// User id from the `{user_id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct UserIdPath(pub UserId);

impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Validation(messages::INVALID_USER_ID))?;
        raw.parse()
            .map(Self)
            .map_err(|_| AppError::Validation(messages::INVALID_USER_ID))
    }
}
