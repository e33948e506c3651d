//! The uniform `{status, message?, ...payload}` response wrapper.

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use lunev_shop_core::ResponseStatus;

/// Successful response envelope.
///
/// The payload is flattened into the top-level object, so
/// `Envelope::success(Cart { cart })` serializes as
/// `{"status":"success","cart":[...]}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(flatten)]
    pub payload: T,
}

/// Empty payload for message-only responses.
#[derive(Debug, Serialize)]
pub struct NoPayload {}

impl<T: Serialize> Envelope<T> {
    /// Success with a payload and no message.
    pub const fn success(payload: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            payload,
        }
    }

    /// Success with a message and a payload.
    pub const fn with_message(message: &'static str, payload: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: Some(message),
            payload,
        }
    }
}

impl Envelope<NoPayload> {
    /// Success carrying only a message.
    pub const fn message(message: &'static str) -> Self {
        Self::with_message(message, NoPayload {})
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
