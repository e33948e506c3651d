//! Favorites operations.

use sqlx::PgPool;

use lunev_shop_core::{ProductId, UserId};

use crate::db::{FavoriteRepository, RepositoryError};

/// Result of adding a favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    Added,
    AlreadyPresent,
}

/// Add a product to a user's favorites.
///
/// Adding an existing favorite is a successful no-op. A unique-index
/// conflict from a concurrent add is reported the same way.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if a query fails.
pub async fn add_favorite(
    pool: &PgPool,
    user_id: UserId,
    product_id: ProductId,
) -> Result<FavoriteOutcome, RepositoryError> {
    let favorites = FavoriteRepository::new(pool);

    if favorites.exists(user_id, product_id).await? {
        return Ok(FavoriteOutcome::AlreadyPresent);
    }

    match favorites.insert(user_id, product_id).await {
        Ok(()) => Ok(FavoriteOutcome::Added),
        Err(RepositoryError::Conflict(_)) => Ok(FavoriteOutcome::AlreadyPresent),
        Err(e) => Err(e),
    }
}
