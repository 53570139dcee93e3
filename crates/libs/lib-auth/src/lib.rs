//! # Authentication Library
//!
//! Password hashing and signed access token management.

pub mod pwd;
pub mod token;

// Re-export commonly used types
pub use pwd::{hash_password, verify_password, PwdError};
pub use token::{decode_token, issue_token, Claims, TokenError};
