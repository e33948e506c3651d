//! Per-request correlation ID.
//!
//! Shop clients report failed cart and favorites calls by the
//! `x-request-id` they got back. The same value is the `request_id` field
//! on the `http_request` span and a tag on any Sentry event raised while
//! handling the request, so one ID finds the log lines and the error report.
//!
//! A client-supplied ID is kept only if it is short and made of token
//! characters; anything else is replaced with a fresh UUID v4 so log fields
//! and Sentry tags stay bounded.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest client-supplied ID that is reused.
const MAX_CLIENT_ID_LEN: usize = 64;

fn is_acceptable(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_CLIENT_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
}

/// The ID for this request: the caller's if acceptable, otherwise a new one.
fn resolve(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|id| is_acceptable(id))
        .map_or_else(|| Uuid::new_v4().to_string(), ToOwned::to_owned)
}

/// Attach the correlation ID to the span, the Sentry scope and the response.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = resolve(request.headers());

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| scope.set_tag("request_id", &request_id));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn headers_with(id: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(id).unwrap());
        headers
    }

    #[test]
    fn test_client_id_is_reused() {
        assert_eq!(resolve(&headers_with("order-42_retry.1")), "order-42_retry.1");
    }

    #[test]
    fn test_unusable_client_id_is_replaced() {
        let too_long = "a".repeat(MAX_CLIENT_ID_LEN + 1);
        for id in ["", "has space", "semi;colon", too_long.as_str()] {
            let resolved = resolve(&headers_with(id));
            assert_ne!(resolved, id);
            assert!(Uuid::parse_str(&resolved).is_ok());
        }
    }

    #[test]
    fn test_missing_header_generates_uuid() {
        assert!(Uuid::parse_str(&resolve(&HeaderMap::new())).is_ok());
    }
}
