//! Core types for the shop backend.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod bonus;
pub mod id;
pub mod pg_array;
pub mod price;
pub mod status;
pub mod username;
pub mod variant;

pub use bonus::{bonus_label, format_grouped};
pub use id::*;
pub use pg_array::parse_pg_array;
pub use price::Price;
pub use status::ResponseStatus;
pub use username::username_from_email;
pub use variant::Variant;
