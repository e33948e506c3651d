//! Cart handlers.
//!
//! Clients identify the cart owner by `userId` in the body or path. A cart
//! row is keyed by `(userId, productId, selectedMemory)`; a missing, `null`
//! or empty `selectedMemory` is one and the same key.

use axum::extract::State;
use serde::{Deserialize, Serialize};

use lunev_shop_core::{ProductId, UserId, Variant};

use crate::db::CartRepository;
use crate::envelope::{Envelope, NoPayload};
use crate::error::{AppError, Result};
use crate::messages;
use crate::middleware::ApiJson;
use crate::middleware::extract::UserIdPath;
use crate::models::CartLine;
use crate::services::cart::{AddOutcome, CartError, CartService};
use crate::state::AppState;

/// Quantity used when an add request does not specify one.
pub const DEFAULT_ADD_QUANTITY: i32 = 1;

/// Body of `POST /api/cart/add-item`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddItemRequest {
    pub user_id: Option<UserId>,
    pub product_id: Option<ProductId>,
    pub quantity: Option<i32>,
    pub selected_memory: Variant,
}

/// Body of `PUT /api/cart/update-quantity`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateQuantityRequest {
    pub user_id: Option<UserId>,
    pub product_id: Option<ProductId>,
    pub quantity: Option<i32>,
    pub selected_memory: Variant,
}

/// Body of `DELETE /api/cart/remove-item`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoveItemRequest {
    pub user_id: Option<UserId>,
    pub product_id: Option<ProductId>,
    pub selected_memory: Variant,
}

/// Payload of `GET /api/cart/user/{user_id}`.
#[derive(Debug, Serialize)]
pub struct CartPayload {
    pub cart: Vec<CartLine>,
}

/// Both ids, if present and positive.
pub(crate) fn require_ids(
    user_id: Option<UserId>,
    product_id: Option<ProductId>,
    message: &'static str,
) -> Result<(UserId, ProductId)> {
    match (
        user_id.filter(UserId::is_present),
        product_id.filter(ProductId::is_present),
    ) {
        (Some(user_id), Some(product_id)) => Ok((user_id, product_id)),
        _ => Err(AppError::Validation(message)),
    }
}

fn cart_failure(message: &'static str) -> impl FnOnce(CartError) -> AppError {
    move |err| match err {
        CartError::ProductNotFound(_) => AppError::NotFound(messages::PRODUCT_NOT_FOUND),
        CartError::Repository(source) => AppError::internal(message)(source),
    }
}

/// `POST /api/cart/add-item` - add a product variant, or increment it.
pub async fn add_item(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<AddItemRequest>,
) -> Result<Envelope<NoPayload>> {
    let (user_id, product_id) =
        require_ids(body.user_id, body.product_id, messages::IDS_REQUIRED)?;
    let quantity = body.quantity.unwrap_or(DEFAULT_ADD_QUANTITY);

    let outcome = CartService::new(state.pool())
        .add_item(user_id, product_id, quantity, &body.selected_memory)
        .await
        .map_err(cart_failure(messages::CART_ADD_FAILED))?;

    match outcome {
        AddOutcome::Inserted => {
            tracing::debug!(%user_id, %product_id, quantity, "Cart row inserted");
        }
        AddOutcome::Incremented { quantity } => {
            tracing::debug!(%user_id, %product_id, quantity, "Cart row incremented");
        }
    }

    Ok(Envelope::message(messages::CART_ITEM_ADDED))
}

/// `GET /api/cart/user/{user_id}` - the user's cart, newest first.
pub async fn show(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> Result<Envelope<CartPayload>> {
    let cart = CartRepository::new(state.pool())
        .list_for_user(user_id)
        .await
        .map_err(AppError::list_unavailable("cart", messages::CART_FETCH_FAILED))?;

    Ok(Envelope::success(CartPayload { cart }))
}

/// `PUT /api/cart/update-quantity` - overwrite a row's quantity.
///
/// A quantity of zero or less removes the row. Updating a row that does not
/// exist succeeds without effect.
pub async fn update_quantity(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<UpdateQuantityRequest>,
) -> Result<Envelope<NoPayload>> {
    let (user_id, product_id) =
        require_ids(body.user_id, body.product_id, messages::PARAMS_REQUIRED)?;
    let quantity = body
        .quantity
        .ok_or(AppError::Validation(messages::PARAMS_REQUIRED))?;

    let removed = CartService::new(state.pool())
        .set_quantity(user_id, product_id, &body.selected_memory, quantity)
        .await
        .map_err(cart_failure(messages::CART_UPDATE_FAILED))?;

    Ok(Envelope::message(if removed {
        messages::CART_ITEM_DELETED
    } else {
        messages::CART_QUANTITY_UPDATED
    }))
}

/// `DELETE /api/cart/remove-item` - remove a variant from the cart.
///
/// Removing a row that does not exist succeeds.
pub async fn remove_item(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RemoveItemRequest>,
) -> Result<Envelope<NoPayload>> {
    let (user_id, product_id) =
        require_ids(body.user_id, body.product_id, messages::PARAMS_REQUIRED)?;

    let removed = CartRepository::new(state.pool())
        .remove(user_id, product_id, &body.selected_memory)
        .await
        .map_err(AppError::internal(messages::CART_REMOVE_FAILED))?;
    tracing::debug!(%user_id, %product_id, removed, "Cart rows removed");

    Ok(Envelope::message(messages::CART_ITEM_REMOVED))
}
