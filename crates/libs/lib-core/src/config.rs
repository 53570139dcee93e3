//! # Application Configuration
//!
//! Configuration loaded from environment variables and validated on startup,
//! so a misconfigured process fails fast instead of limping along. The
//! signing secret is read exactly once here and injected into whatever needs
//! it (handlers, middleware) through axum state, never re-read ad hoc.

use lib_utils::envs::get_env;
use std::env;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// SQLite database connection URL
    pub database_url: String,

    /// Secret key for token signing and verification.
    ///
    /// **Must be at least 32 characters long.** Loaded once at process
    /// start; never rotated for the process lifetime.
    pub jwt_secret: String,

    /// Token validity period in hours (default 24).
    ///
    /// Valid range: 1-720 hours (1 hour to 30 days).
    pub jwt_expiration_hours: i64,

    /// Development mode: 500 responses include the underlying error detail.
    ///
    /// Driven by `APP_ENV=development`. Off in any other environment.
    pub dev_mode: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:auth.db".to_string());

        let jwt_secret = get_env("JWT_SECRET").map_err(|e| e.to_string())?;

        let jwt_expiration_hours = env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .map_err(|e| format!("JWT_EXPIRATION_HOURS must be a valid number: {}", e))?;

        let dev_mode = env::var("APP_ENV")
            .map(|v| v.eq_ignore_ascii_case("development"))
            .unwrap_or(false);

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_expiration_hours,
            dev_mode,
        })
    }

    /// Validate configuration values against security rules.
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT_SECRET must be at least 32 characters long".to_string());
        }

        if self.jwt_expiration_hours < 1 || self.jwt_expiration_hours > 720 {
            return Err("JWT_EXPIRATION_HOURS must be between 1 and 720 (30 days)".to_string());
        }

        Ok(())
    }
}
