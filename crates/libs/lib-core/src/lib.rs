//! # Core Library
//!
//! Configuration, error taxonomy, DTOs, and the persistence store.

pub mod config;
pub mod dto;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use config::Config;
pub use error::{AuthError, Result};
pub use model::store::{create_pool, init_db, DbPool};
