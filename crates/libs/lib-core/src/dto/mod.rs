//! # Data Transfer Objects (DTOs)
//!
//! Request and response structures exchanged with clients. All DTOs use
//! snake_case JSON field names (serde default); optional fields are omitted
//! when `None`.

pub mod auth;

pub use auth::*;
