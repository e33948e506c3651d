//! Cart repository.
//!
//! Rows are addressed by `(user_id, product_id, selected_memory)`. The
//! variant comparison uses `IS NOT DISTINCT FROM` so that a missing variant
//! (`NULL`) matches an existing `NULL` row; plain `=` would never match it.

use sqlx::PgPool;

use lunev_shop_core::{CartItemId, ProductId, UserId, Variant};

use super::RepositoryError;
use crate::models::{CartLine, CartLineRow};

/// Identity and quantity of an existing cart row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct CartSlot {
    pub cart_id: CartItemId,
    pub quantity: i32,
}

/// Repository for cart rows.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find the row for a `(user, product, variant)` key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_slot(
        &self,
        user_id: UserId,
        product_id: ProductId,
        variant: &Variant,
    ) -> Result<Option<CartSlot>, RepositoryError> {
        let slot = sqlx::query_as::<_, CartSlot>(
            r"
            SELECT cart_id, quantity
            FROM cart
            WHERE user_id = $1
              AND product_id = $2
              AND selected_memory IS NOT DISTINCT FROM $3
            LIMIT 1
            ",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(variant)
        .fetch_optional(self.pool)
        .await?;

        Ok(slot)
    }

    /// Overwrite the quantity of a row found by [`Self::find_slot`].
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn set_slot_quantity(
        &self,
        cart_id: CartItemId,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE cart SET quantity = $1 WHERE cart_id = $2")
            .bind(quantity)
            .bind(cart_id)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Insert a new cart row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i32,
        variant: &Variant,
    ) -> Result<CartItemId, RepositoryError> {
        let (cart_id,): (CartItemId,) = sqlx::query_as(
            r"
            INSERT INTO cart (user_id, product_id, quantity, selected_memory)
            VALUES ($1, $2, $3, $4)
            RETURNING cart_id
            ",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .bind(variant)
        .fetch_one(self.pool)
        .await?;

        Ok(cart_id)
    }

    /// All cart lines of a user, most recently added first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<CartLine>, RepositoryError> {
        let rows = sqlx::query_as::<_, CartLineRow>(
            r"
            SELECT c.cart_id,
                   c.user_id,
                   c.product_id,
                   c.quantity,
                   c.selected_memory,
                   c.added_at::timestamptz AS added_at,
                   p.name,
                   p.price::numeric AS price,
                   p.main_image,
                   p.color_options::text AS color_options
            FROM cart c
            JOIN products p ON c.product_id = p.product_id
            WHERE c.user_id = $1
            ORDER BY c.added_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(CartLine::from).collect())
    }

    /// Set the quantity of the row for a key. A missing row is left alone.
    ///
    /// Returns the number of rows updated.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update_quantity(
        &self,
        user_id: UserId,
        product_id: ProductId,
        variant: &Variant,
        quantity: i32,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE cart
            SET quantity = $1
            WHERE user_id = $2
              AND product_id = $3
              AND selected_memory IS NOT DISTINCT FROM $4
            ",
        )
        .bind(quantity)
        .bind(user_id)
        .bind(product_id)
        .bind(variant)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete the row for a key. A missing row is not an error.
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
        variant: &Variant,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM cart
            WHERE user_id = $1
              AND product_id = $2
              AND selected_memory IS NOT DISTINCT FROM $3
            ",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(variant)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
