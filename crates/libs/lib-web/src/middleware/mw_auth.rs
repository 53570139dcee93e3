//! # Authentication Middleware
//!
//! Validates the `Authorization: Bearer <token>` header on protected routes
//! and injects the decoded [`Claims`] into request extensions.
//!
//! Wire it with the signing config as middleware state:
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use lib_core::Config;
//! use lib_web::middleware::mw_auth::require_auth;
//! # fn router(config: Config) -> Router {
//! Router::new()
//!     .route("/api/me", get(lib_web::handlers::auth::me))
//!     .layer(from_fn_with_state(config, require_auth))
//! # }
//! ```
//!
//! Handlers behind the layer extract the identity with `Extension<Claims>`.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
};
use lib_auth::{decode_token, Claims, TokenError};
use lib_core::Config;
use tracing::{debug, warn};

/// Reject requests without a valid, unexpired bearer token.
///
/// Expired and tampered tokens are both answered with `401`, but they are
/// logged differently: expiry is routine, a bad signature is suspicious.
pub async fn require_auth(
    State(config): State<Config>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            warn!("[AUTH] missing Authorization header");
            StatusCode::UNAUTHORIZED
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("[AUTH] malformed Authorization header");
        StatusCode::UNAUTHORIZED
    })?;

    let claims: Claims = match decode_token(token, &config.jwt_secret) {
        Ok(claims) => claims,
        Err(TokenError::Expired) => {
            debug!("[AUTH] expired token");
            return Err(StatusCode::UNAUTHORIZED);
        }
        Err(e) => {
            warn!("[AUTH] rejected token: {}", e);
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    debug!("[AUTH] authenticated '{}'", claims.username);
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
