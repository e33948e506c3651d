//! Database operations for the shop `PostgreSQL` store.
//!
//! ## Tables
//!
//! - `users` - Registered customers (password hash, profile fields)
//! - `categories` - Product categories (managed outside this service)
//! - `products` - Catalogue (read-only here)
//! - `cart` - One row per `(user, product, selected_memory)`
//! - `favorites` - One row per `(user, product)`
//!
//! The reference schema lives in `crates/api/schema.sql`. Applying it is a
//! manual step; this service never alters the schema.
//!
//! Every repository runs single statements against the shared pool. No
//! transactions are opened: the multi-step flows in `services` are
//! check-then-write sequences without isolation.

pub mod cart;
pub mod favorites;
pub mod products;
pub mod users;

use std::str::FromStr;

use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use thiserror::Error;

pub use cart::CartRepository;
pub use favorites::FavoriteRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

use crate::config::PoolConfig;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// A stored row could not be decoded into its domain type.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

impl RepositoryError {
    /// Map a unique-constraint violation to `Conflict`, anything else to
    /// `Database`.
    pub(crate) fn from_insert(err: sqlx::Error, conflict: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err
            && db_err.is_unique_violation()
        {
            return Self::Conflict(conflict.to_owned());
        }
        Self::Database(err)
    }
}

/// Build connect options from a connection string.
///
/// TLS is mandatory unless the URL names an `sslmode` itself. `require`
/// encrypts the transport without verifying the server certificate, which
/// is what managed Postgres hosts with self-signed chains need.
///
/// # Errors
///
/// Returns `sqlx::Error::Configuration` if the URL cannot be parsed.
pub fn connect_options(database_url: &SecretString) -> Result<PgConnectOptions, sqlx::Error> {
    let url = database_url.expose_secret();
    let options = PgConnectOptions::from_str(url)?;
    if url.contains("sslmode=") {
        Ok(options)
    } else {
        Ok(options.ssl_mode(PgSslMode::Require))
    }
}

/// Create a `PostgreSQL` connection pool that connects on first use.
///
/// The server starts even when the database is briefly unreachable; each
/// request checks a connection out of the bounded pool and the readiness
/// check reports an outage.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL cannot be parsed.
pub fn create_pool(database_url: &SecretString, config: PoolConfig) -> Result<PgPool, sqlx::Error> {
    Ok(pool_options(config).connect_lazy_with(connect_options(database_url)?))
}

fn pool_options(config: PoolConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(0)
        .acquire_timeout(config.acquire_timeout)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tls_required_by_default() {
        let url = SecretString::from("postgres://u:p@db.example.com:5432/shop");
        let options = connect_options(&url).unwrap();
        assert!(matches!(options.get_ssl_mode(), PgSslMode::Require));
    }

    #[test]
    fn test_explicit_sslmode_wins() {
        let url = SecretString::from("postgres://u:p@localhost/shop?sslmode=disable");
        let options = connect_options(&url).unwrap();
        assert!(matches!(options.get_ssl_mode(), PgSslMode::Disable));
    }

    #[test]
    fn test_invalid_url() {
        let url = SecretString::from("not a url");
        assert!(connect_options(&url).is_err());
    }
}
