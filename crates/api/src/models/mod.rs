//! Domain models for the shop API.
//!
//! Row types (`*Row`) mirror query output; the public types are what the
//! handlers serialize. Prices are always [`Price`](lunev_shop_core::Price),
//! so they reach clients as JSON numbers whatever the column type.

pub mod cart;
pub mod favorite;
pub mod product;
pub mod user;

pub use cart::{CartLine, CartLineRow};
pub use favorite::FavoriteEntry;
pub use product::{Product, ProductDecodeError, ProductRow};
pub use user::{NewUser, User, UserWithPassword};
