//! Catalogue product types.
//!
//! Product columns differ between deployments: some tables carry
//! `images`/`memory_options`/`description`, others only the core set
//! (`product_id`, `name`, `price`, `category_id`, `main_image`,
//! `color_options`, `bonus_points`). The whole row is therefore read as a
//! JSON object and every column passes through to clients. Only `price` and
//! the array-valued columns are normalized.

use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::types::Json;
use thiserror::Error;

use lunev_shop_core::{Price, ProductId, bonus_label, parse_pg_array};

/// Columns that hold lists, either as `TEXT[]` or as an array literal in a
/// `TEXT` column.
pub const ARRAY_COLUMNS: &[&str] = &[
    "images",
    "color_options",
    "memory_options",
    "delivery_options",
];

/// Optional price columns; text values are converted to numbers.
pub const OPTIONAL_PRICE_COLUMNS: &[&str] = &["old_price"];

/// A product row as selected by `to_jsonb(p)` joined with its category name.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    pub product: Json<Map<String, Value>>,
    pub category_name: Option<String>,
}

/// A product row that cannot be served.
#[derive(Debug, Error)]
pub enum ProductDecodeError {
    #[error("product row has no `{0}` column")]
    MissingColumn(&'static str),

    #[error("product column `{column}` holds {value}, expected {expected}")]
    InvalidValue {
        column: &'static str,
        expected: &'static str,
        value: Value,
    },
}

/// A product as returned to clients.
///
/// `attributes` carries every other column of the row unchanged, so new
/// catalogue columns reach clients without code changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub product_id: ProductId,
    pub price: Price,
    pub category_name: Option<String>,
    /// Display label such as `+1 500 бонусов`; only set on the detail view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Product {
    /// Bonus points awarded for the product; 0 when the column is absent.
    #[must_use]
    pub fn bonus_points(&self) -> i64 {
        match self.attributes.get("bonus_points") {
            Some(Value::Number(n)) => n.as_i64().unwrap_or_default(),
            Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
            _ => 0,
        }
    }

    /// Attach the localized bonus label used by the product page.
    #[must_use]
    pub fn with_bonus_label(mut self) -> Self {
        self.bonus = bonus_label(self.bonus_points());
        if self.bonus.is_some() {
            self.attributes.remove("bonus");
        }
        self
    }
}

impl TryFrom<ProductRow> for Product {
    type Error = ProductDecodeError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let Json(mut attributes) = row.product;

        let raw_id = attributes
            .remove("product_id")
            .ok_or(ProductDecodeError::MissingColumn("product_id"))?;
        let product_id = serde_json::from_value::<ProductId>(raw_id.clone()).map_err(|_| {
            ProductDecodeError::InvalidValue {
                column: "product_id",
                expected: "an integer id",
                value: raw_id,
            }
        })?;

        let raw_price = attributes
            .remove("price")
            .ok_or(ProductDecodeError::MissingColumn("price"))?;
        let price = decode_price(&raw_price).ok_or(ProductDecodeError::InvalidValue {
            column: "price",
            expected: "a number",
            value: raw_price,
        })?;

        attributes.remove("category_name");
        for column in OPTIONAL_PRICE_COLUMNS {
            if let Some(value) = attributes.get_mut(*column)
                && let Some(price) = value.as_str().and_then(|s| s.parse::<Price>().ok())
            {
                *value = serde_json::to_value(price).unwrap_or(Value::Null);
            }
        }
        for column in ARRAY_COLUMNS {
            if let Some(value) = attributes.get_mut(*column) {
                normalize_array(value);
            }
        }

        Ok(Self {
            product_id,
            price,
            category_name: row.category_name,
            bonus: None,
            attributes,
        })
    }
}

/// `NUMERIC` arrives as a JSON number, `TEXT`/`MONEY`-style columns as text.
fn decode_price(value: &Value) -> Option<Price> {
    match value {
        Value::Number(n) => n.to_string().parse().ok(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn normalize_array(value: &mut Value) {
    let items = match value {
        Value::Array(_) => return,
        Value::String(literal) => parse_pg_array(Some(literal)),
        _ => Vec::new(),
    };
    *value = Value::from(items);
}
