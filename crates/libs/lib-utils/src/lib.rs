//! # Utilities Library
//!
//! Shared utility functions: environment variables and schema validation.

pub mod envs;
pub mod validation;

// Re-export commonly used types
pub use envs::{get_env, get_env_parse};
pub use validation::{FieldErrors, Rule, Schema};
