//! Cart operations that span more than one query.

use sqlx::PgPool;
use tracing::instrument;

use lunev_shop_core::{ProductId, UserId, Variant};

use crate::db::{CartRepository, ProductRepository, RepositoryError};

/// What an add-to-cart call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new row was inserted.
    Inserted,
    /// An existing row for the same variant was incremented to this quantity.
    Incremented { quantity: i32 },
}

/// Errors from cart operations.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    /// The product does not exist.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Cart service.
pub struct CartService<'a> {
    products: ProductRepository<'a>,
    cart: CartRepository<'a>,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            products: ProductRepository::new(pool),
            cart: CartRepository::new(pool),
        }
    }

    /// Add `quantity` units of a product variant to a user's cart.
    ///
    /// Looks up the `(user, product, variant)` row and either increments it
    /// or inserts a new one. The read and the write are separate statements,
    /// so two concurrent adds for the same key can lose one increment.
    ///
    /// # Errors
    ///
    /// Returns `CartError::ProductNotFound` if the product does not exist.
    /// Returns `CartError::Repository` if a query fails.
    #[instrument(skip(self, variant), fields(variant = ?variant.as_deref()))]
    pub async fn add_item(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i32,
        variant: &Variant,
    ) -> Result<AddOutcome, CartError> {
        if !self.products.exists(product_id).await? {
            return Err(CartError::ProductNotFound(product_id));
        }

        if let Some(slot) = self.cart.find_slot(user_id, product_id, variant).await? {
            let quantity = slot.quantity.saturating_add(quantity);
            self.cart.set_slot_quantity(slot.cart_id, quantity).await?;
            return Ok(AddOutcome::Incremented { quantity });
        }

        self.cart
            .insert(user_id, product_id, quantity, variant)
            .await?;
        Ok(AddOutcome::Inserted)
    }

    /// Set a row's quantity; zero or negative removes the row instead.
    ///
    /// Returns `true` when the call was treated as a removal.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Repository` if the query fails.
    #[instrument(skip(self, variant), fields(variant = ?variant.as_deref()))]
    pub async fn set_quantity(
        &self,
        user_id: UserId,
        product_id: ProductId,
        variant: &Variant,
        quantity: i32,
    ) -> Result<bool, CartError> {
        if quantity <= 0 {
            self.cart.remove(user_id, product_id, variant).await?;
            return Ok(true);
        }

        self.cart
            .update_quantity(user_id, product_id, variant, quantity)
            .await?;
        Ok(false)
    }
}
