//! Cross-origin policy.
//!
//! The shop frontend is served from a different origin than this API, and
//! clients identify themselves by user id in the request body, so no
//! credentials are involved and any origin may call the API.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer: any origin, the five methods the API uses, and
/// only the `Content-Type` request header.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}
