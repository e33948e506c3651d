//! Authentication service.
//!
//! Passwords are hashed with bcrypt at a fixed cost of 10, which keeps
//! hashes interchangeable with the `$2a$`/`$2b$` hashes already stored for
//! existing accounts. No session or token is issued: a successful login just
//! returns the user, and clients carry the user id themselves.

mod error;

pub use error::AuthError;

use sqlx::PgPool;
use tracing::instrument;

use lunev_shop_core::username_from_email;

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::{NewUser, User};

/// bcrypt work factor for new hashes.
pub const PASSWORD_HASH_COST: u32 = 10;

/// Registration input after presence validation.
#[derive(Debug, Clone, Copy)]
pub struct Registration<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone: Option<&'a str>,
}

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new user.
    ///
    /// Checks the email is free, derives the username from the email local
    /// part, hashes the password, and inserts one row.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserAlreadyExists` if the email is registered.
    /// Returns `AuthError::PasswordHash` or `AuthError::Repository` on
    /// backend failures.
    #[instrument(skip_all)]
    pub async fn register(&self, registration: Registration<'_>) -> Result<User, AuthError> {
        if self.users.email_exists(registration.email).await? {
            return Err(AuthError::UserAlreadyExists);
        }

        let password_hash = hash_password(registration.password).await?;

        let user = self
            .users
            .create(NewUser {
                username: username_from_email(registration.email),
                email: registration.email,
                password_hash: &password_hash,
                first_name: registration.first_name,
                last_name: registration.last_name,
                phone: registration.phone.unwrap_or_default(),
            })
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if no user has this email.
    /// Returns `AuthError::InvalidCredentials` if the password is wrong.
    #[instrument(skip_all)]
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let record = self
            .users
            .get_with_password(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !verify_password(password, &record.password_hash).await? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(record.user)
    }
}

/// Hash a password with bcrypt on the blocking pool.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails, `AuthError::HashTask`
/// if the blocking task dies.
pub async fn hash_password(password: &str) -> Result<String, AuthError> {
    let password = password.to_owned();
    let hash =
        tokio::task::spawn_blocking(move || bcrypt::hash(password, PASSWORD_HASH_COST)).await??;
    Ok(hash)
}

/// Check a password against a stored bcrypt hash.
///
/// A stored hash that bcrypt cannot parse counts as a mismatch rather than a
/// server fault.
///
/// # Errors
///
/// Returns `AuthError::HashTask` only if the verification task dies.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    tokio::task::spawn_blocking(move || match bcrypt::verify(password, &hash) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash is not valid bcrypt");
            false
        }
    })
    .await
    .map_err(AuthError::from)
}
