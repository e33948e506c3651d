//! Favorites repository.

use sqlx::PgPool;

use lunev_shop_core::{FavoriteId, ProductId, UserId};

use super::RepositoryError;
use crate::models::FavoriteEntry;

/// Repository for favorite rows.
pub struct FavoriteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FavoriteRepository<'a> {
    /// Create a new favorites repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Check whether the product is already in the user's favorites.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn exists(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<bool, RepositoryError> {
        let row: Option<(FavoriteId,)> = sqlx::query_as(
            "SELECT favorite_id FROM favorites WHERE user_id = $1 AND product_id = $2",
        )
        .bind(user_id)
        .bind(product_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.is_some())
    }

    /// Insert a favorite row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if a unique index rejects a
    /// concurrent duplicate.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO favorites (user_id, product_id) VALUES ($1, $2)")
            .bind(user_id)
            .bind(product_id)
            .execute(self.pool)
            .await
            .map_err(|e| RepositoryError::from_insert(e, "favorite already exists"))?;

        Ok(())
    }

    /// All favorites of a user, most recently added first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<FavoriteEntry>, RepositoryError> {
        let rows = sqlx::query_as::<_, FavoriteEntry>(
            r"
            SELECT f.favorite_id,
                   f.user_id,
                   f.product_id,
                   f.added_at::timestamptz AS added_at,
                   p.name,
                   p.price::numeric AS price,
                   p.main_image
            FROM favorites f
            JOIN products p ON f.product_id = p.product_id
            WHERE f.user_id = $1
            ORDER BY f.added_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Delete a favorite. A missing row is not an error.
    ///
    /// Returns the number of rows deleted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn remove(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND product_id = $2")
            .bind(user_id)
            .bind(product_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
