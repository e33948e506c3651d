//! Favorite list entries.

use chrono::{DateTime, Utc};
use serde::Serialize;

use lunev_shop_core::{FavoriteId, Price, ProductId, UserId};

/// A favorite joined with display fields of its product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct FavoriteEntry {
    pub favorite_id: FavoriteId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub added_at: DateTime<Utc>,
    pub name: String,
    pub price: Price,
    pub main_image: Option<String>,
}
