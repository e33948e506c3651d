//! Catalogue queries.
//!
//! Products and categories are maintained outside this service; these
//! queries only read. Each row is selected whole as `to_jsonb(p)`, so the
//! set of product columns may differ between deployments without breaking
//! the query. Decoding into [`Product`] happens in `models::product`.

use sqlx::PgPool;

use lunev_shop_core::ProductId;

use super::RepositoryError;
use crate::models::{Product, ProductRow};

const PRODUCT_SELECT: &str = r"
    SELECT to_jsonb(p) AS product,
           c.name AS category_name
    FROM products p
    LEFT JOIN categories c ON p.category_id = c.id
";

/// Repository for product reads.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every product, ordered by id.
    ///
    /// Rows that cannot be decoded are logged and left out of the listing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!("{PRODUCT_SELECT} ORDER BY p.product_id");
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .fetch_all(self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| match Product::try_from(row) {
                Ok(product) => Some(product),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping undecodable product row");
                    None
                }
            })
            .collect())
    }

    /// Get a single product by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if the row cannot be decoded.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("{PRODUCT_SELECT} WHERE p.product_id = $1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        row.map(Product::try_from)
            .transpose()
            .map_err(|e| RepositoryError::DataCorruption(e.to_string()))
    }

    /// Check that a product exists without loading it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn exists(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let row: Option<(ProductId,)> =
            sqlx::query_as("SELECT product_id FROM products WHERE product_id = $1")
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        Ok(row.is_some())
    }
}
