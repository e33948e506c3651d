//! User domain types.

use serde::Serialize;

use lunev_shop_core::UserId;

/// A registered customer as returned to clients.
///
/// Carries no credential material; the password hash only travels inside
/// [`UserWithPassword`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    #[sqlx(rename = "user_id")]
    pub id: UserId,
    /// Derived from the email local part at registration.
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Stored as an empty string when not supplied.
    pub phone: Option<String>,
}

/// A user together with the stored password hash, for login checks.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserWithPassword {
    #[sqlx(flatten)]
    pub user: User,
    pub password_hash: String,
}

/// Fields for inserting a new user.
#[derive(Debug, Clone, Copy)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone: &'a str,
}
