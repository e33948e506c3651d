//! Catalogue handlers.

use axum::extract::State;
use serde::Serialize;

use crate::db::ProductRepository;
use crate::envelope::Envelope;
use crate::error::{AppError, Result};
use crate::messages;
use crate::middleware::extract::ProductIdPath;
use crate::models::Product;
use crate::state::AppState;

/// Payload of `GET /api/products`.
#[derive(Debug, Serialize)]
pub struct ProductList {
    pub count: usize,
    pub products: Vec<Product>,
}

/// Payload of `GET /api/product-by-id/{id}`.
#[derive(Debug, Serialize)]
pub struct ProductPayload {
    pub product: Product,
}

/// `GET /api/products` - the whole catalogue.
///
/// Never fails: a backend error is logged and answered with an empty,
/// successful listing so the catalogue page can still render.
pub async fn index(State(state): State<AppState>) -> Envelope<ProductList> {
    let products = match ProductRepository::new(state.pool()).list().await {
        Ok(products) => products,
        Err(e) => {
            tracing::warn!(error = %e, "Product listing failed, serving empty catalogue");
            Vec::new()
        }
    };

    Envelope::success(ProductList {
        count: products.len(),
        products,
    })
}

/// `GET /api/product-by-id/{id}` - one product with its bonus label.
pub async fn show(
    State(state): State<AppState>,
    ProductIdPath(id): ProductIdPath,
) -> Result<Envelope<ProductPayload>> {
    let product = ProductRepository::new(state.pool())
        .get(id)
        .await
        .map_err(AppError::internal(messages::PRODUCT_FETCH_FAILED))?
        .ok_or(AppError::NotFound(messages::PRODUCT_NOT_FOUND))?;

    Ok(Envelope::success(ProductPayload {
        product: product.with_bonus_label(),
    }))
}
