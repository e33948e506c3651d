//! Lunev Shop Core - Shared domain types.
//!
//! This crate provides the types shared by the shop backend components:
//! - `api` - JSON REST service (users, products, cart, favorites)
//! - `integration-tests` - End-to-end tests against a running service
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no database
//! access, no HTTP. Database encoding is available behind the `postgres`
//! feature.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, prices, cart variants, response status and
//!   the small formatting/decoding helpers the API layer needs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
