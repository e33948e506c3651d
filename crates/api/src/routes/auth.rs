//! Registration and login handlers.
//!
//! Presence is the only validation: a field that is missing, `null`, or an
//! empty string counts as not supplied.

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;
use crate::error::{AppError, Result};
use crate::messages;
use crate::middleware::ApiJson;
use crate::models::User;
use crate::services::auth::{AuthService, Registration};
use crate::state::AppState;

/// Body of `POST /api/register`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

/// Body of `POST /api/login`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Payload carrying the sanitized user.
#[derive(Debug, Serialize)]
pub struct UserPayload {
    pub user: User,
}

fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.is_empty())
}

/// `POST /api/register` - create an account.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<Envelope<UserPayload>> {
    let (Some(email), Some(password), Some(first_name), Some(last_name)) = (
        present(body.email.as_deref()),
        present(body.password.as_deref()),
        present(body.first_name.as_deref()),
        present(body.last_name.as_deref()),
    ) else {
        return Err(AppError::Validation(messages::REGISTER_FIELDS_REQUIRED));
    };

    let user = AuthService::new(state.pool())
        .register(Registration {
            email,
            password,
            first_name,
            last_name,
            phone: present(body.phone.as_deref()),
        })
        .await?;

    Ok(Envelope::with_message(
        messages::REGISTERED,
        UserPayload { user },
    ))
}

/// `POST /api/login` - check credentials and return the user.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<Envelope<UserPayload>> {
    let (Some(email), Some(password)) = (
        present(body.email.as_deref()),
        present(body.password.as_deref()),
    ) else {
        return Err(AppError::Validation(messages::LOGIN_FIELDS_REQUIRED));
    };

    let user = AuthService::new(state.pool()).login(email, password).await?;
    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Envelope::with_message(
        messages::LOGGED_IN,
        UserPayload { user },
    ))
}
