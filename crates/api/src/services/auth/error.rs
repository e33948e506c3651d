//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No user registered with the given email.
    #[error("user not found")]
    UserNotFound,

    /// The user exists but the password does not match.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Email already registered.
    #[error("user already exists")]
    UserAlreadyExists,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// The blocking hashing task panicked or was cancelled.
    #[error("password hashing task failed: {0}")]
    HashTask(#[from] tokio::task::JoinError),
}
