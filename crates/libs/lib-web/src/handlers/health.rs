//! # Health Handler

/// Liveness probe for the API root.
pub async fn index() -> &'static str {
    "API is running..."
}
