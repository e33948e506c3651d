//! Cart line types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use lunev_shop_core::{CartItemId, Price, ProductId, UserId, Variant, parse_pg_array};

/// A cart row joined with display fields of its product.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CartLineRow {
    pub cart_id: CartItemId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub selected_memory: Variant,
    pub added_at: DateTime<Utc>,
    pub name: String,
    pub price: Price,
    pub main_image: Option<String>,
    pub color_options: Option<String>,
}

/// A cart line as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub cart_id: CartItemId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub selected_memory: Variant,
    pub added_at: DateTime<Utc>,
    pub name: String,
    pub price: Price,
    pub main_image: Option<String>,
    pub color_options: Vec<String>,
}

impl From<CartLineRow> for CartLine {
    fn from(row: CartLineRow) -> Self {
        Self {
            cart_id: row.cart_id,
            user_id: row.user_id,
            product_id: row.product_id,
            quantity: row.quantity,
            selected_memory: row.selected_memory,
            added_at: row.added_at,
            name: row.name,
            price: row.price,
            main_image: row.main_image,
            color_options: parse_pg_array(row.color_options.as_deref()),
        }
    }
}
