//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                       - Liveness
//! GET    /health/ready                 - Readiness (database reachable)
//!
//! GET    /api/test                     - Server check (port, time)
//!
//! # Auth
//! POST   /api/register                 - Create account
//! POST   /api/login                    - Check credentials, return user
//!
//! # Catalogue
//! GET    /api/products                 - All products (empty on backend failure)
//! GET    /api/product-by-id/{id}       - One product with bonus label
//!
//! # Cart
//! POST   /api/cart/add-item            - Add or increment a variant
//! GET    /api/cart/user/{user_id}      - Cart lines, newest first
//! PUT    /api/cart/update-quantity     - Set quantity (<= 0 removes)
//! DELETE /api/cart/remove-item         - Remove a variant
//!
//! # Favorites
//! POST   /api/favorites/add-item       - Add (idempotent)
//! GET    /api/favorites/user/{user_id} - Favorites, newest first
//! DELETE /api/favorites/remove-item    - Remove
//! ```
//!
//! Anything else answers 404 with the error envelope.

pub mod auth;
pub mod cart;
pub mod favorites;
pub mod products;
pub mod system;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::error::AppError;
use crate::messages;
use crate::state::AppState;

/// Method and path of every endpoint, for the startup log.
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/api/test"),
    ("POST", "/api/register"),
    ("POST", "/api/login"),
    ("GET", "/api/products"),
    ("GET", "/api/product-by-id/{id}"),
    ("POST", "/api/cart/add-item"),
    ("GET", "/api/cart/user/{user_id}"),
    ("PUT", "/api/cart/update-quantity"),
    ("DELETE", "/api/cart/remove-item"),
    ("POST", "/api/favorites/add-item"),
    ("GET", "/api/favorites/user/{user_id}"),
    ("DELETE", "/api/favorites/remove-item"),
];

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add-item", post(cart::add_item))
        .route("/user/{user_id}", get(cart::show))
        .route("/update-quantity", put(cart::update_quantity))
        .route("/remove-item", delete(cart::remove_item))
}

/// Create the favorites routes router.
pub fn favorites_routes() -> Router<AppState> {
    Router::new()
        .route("/add-item", post(favorites::add_item))
        .route("/user/{user_id}", get(favorites::show))
        .route("/remove-item", delete(favorites::remove_item))
}

/// Create the `/api` routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/test", get(system::test))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/products", get(products::index))
        .route("/product-by-id/{id}", get(products::show))
        .nest("/cart", cart_routes())
        .nest("/favorites", favorites_routes())
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(system::health))
        .route("/health/ready", get(system::readiness))
        .nest("/api", api_routes())
        .fallback(not_found)
}

/// Fallback for unmatched routes.
async fn not_found() -> AppError {
    AppError::NotFound(messages::ROUTE_NOT_FOUND)
}
