//! Server check and health endpoints.

use axum::{extract::State, http::StatusCode};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::envelope::Envelope;
use crate::messages;
use crate::state::AppState;

/// Payload of `GET /api/test`.
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub port: u16,
    /// Current server time, RFC 3339 in UTC with milliseconds.
    pub time: String,
}

/// `GET /api/test` - confirm the server is up.
pub async fn test(State(state): State<AppState>) -> Envelope<ServerInfo> {
    Envelope::with_message(
        messages::SERVER_RUNNING,
        ServerInfo {
            port: state.config().port,
            time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        },
    )
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the database is not reachable.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
