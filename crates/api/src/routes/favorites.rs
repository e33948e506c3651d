//! Favorites handlers.

use axum::extract::State;
use serde::{Deserialize, Serialize};

use lunev_shop_core::{ProductId, UserId};

use super::cart::require_ids;
use crate::db::FavoriteRepository;
use crate::envelope::{Envelope, NoPayload};
use crate::error::{AppError, Result};
use crate::messages;
use crate::middleware::ApiJson;
use crate::middleware::extract::UserIdPath;
use crate::models::FavoriteEntry;
use crate::services::favorites::{FavoriteOutcome, add_favorite};
use crate::state::AppState;

/// Body of the favorites add and remove endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FavoriteRequest {
    pub user_id: Option<UserId>,
    pub product_id: Option<ProductId>,
}

/// Payload of `GET /api/favorites/user/{user_id}`.
#[derive(Debug, Serialize)]
pub struct FavoritesPayload {
    pub favorites: Vec<FavoriteEntry>,
}

/// `POST /api/favorites/add-item` - add a product; repeats succeed.
pub async fn add_item(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<FavoriteRequest>,
) -> Result<Envelope<NoPayload>> {
    let (user_id, product_id) =
        require_ids(body.user_id, body.product_id, messages::IDS_REQUIRED)?;

    let outcome = add_favorite(state.pool(), user_id, product_id)
        .await
        .map_err(AppError::internal(messages::FAVORITE_ADD_FAILED))?;

    Ok(Envelope::message(match outcome {
        FavoriteOutcome::Added => messages::FAVORITE_ADDED,
        FavoriteOutcome::AlreadyPresent => messages::FAVORITE_EXISTS,
    }))
}

/// `GET /api/favorites/user/{user_id}` - favorites, newest first.
pub async fn show(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> Result<Envelope<FavoritesPayload>> {
    let favorites = FavoriteRepository::new(state.pool())
        .list_for_user(user_id)
        .await
        .map_err(AppError::list_unavailable(
            "favorites",
            messages::FAVORITES_FETCH_FAILED,
        ))?;

    Ok(Envelope::success(FavoritesPayload { favorites }))
}

/// `DELETE /api/favorites/remove-item` - remove a product; absent is fine.
pub async fn remove_item(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<FavoriteRequest>,
) -> Result<Envelope<NoPayload>> {
    let (user_id, product_id) =
        require_ids(body.user_id, body.product_id, messages::PARAMS_REQUIRED)?;

    FavoriteRepository::new(state.pool())
        .remove(user_id, product_id)
        .await
        .map_err(AppError::internal(messages::FAVORITE_REMOVE_FAILED))?;

    Ok(Envelope::message(messages::FAVORITE_REMOVED))
}
