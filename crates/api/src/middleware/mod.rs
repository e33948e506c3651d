//! HTTP middleware and extractors.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. CORS (any origin; GET/POST/PUT/DELETE/OPTIONS; `Content-Type` only)
//! 3. `TraceLayer` (request span with status and latency)
//! 4. Request ID (recorded into the span, echoed in the response)

pub mod cors;
pub mod extract;
pub mod request_id;

pub use cors::cors_layer;
pub use extract::ApiJson;
pub use request_id::request_id_middleware;
