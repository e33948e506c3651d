//! Business logic services.
//!
//! - `auth` - Registration and password login
//! - `cart` - Add-to-cart upsert (check existing row, then increment or insert)
//! - `favorites` - Idempotent favorite add

pub mod auth;
pub mod cart;
pub mod favorites;
