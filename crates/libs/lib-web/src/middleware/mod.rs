//! # Middleware
//!
//! Axum middleware for authentication and request logging.
//!
//! - **[`mw_auth`]**: Bearer-token validation for protected routes
//! - **[`mw_logging`]**: request/response logging

// region: --- Modules
pub mod mw_auth;
pub mod mw_logging;
// endregion: --- Modules

// region: --- Re-exports
pub use mw_auth::require_auth;
pub use mw_logging::log_requests;
// endregion: --- Re-exports
