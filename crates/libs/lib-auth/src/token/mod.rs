//! # Access Token Management
//!
//! JWT issuance and verification (HS256).
//!
//! Tokens embed the user's public identity and an absolute expiry. They are
//! signed, not encrypted: nothing secret (in particular no password digest)
//! may ever ride in the claims. The signing secret is loaded once at process
//! start and stays constant for the process lifetime.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Display name
    pub fullname: String,
    /// Unique username
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Errors from token issuance and verification.
///
/// `Expired` and `Invalid` are both "unauthenticated" to callers, but the
/// distinction matters in logs: an expired token is routine, a tampered one
/// is not.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Well-formed and correctly signed, but past its expiry.
    #[error("token expired")]
    Expired,

    /// Malformed token or signature mismatch.
    #[error("invalid token: {0}")]
    Invalid(String),

    /// Signing failed while issuing a token.
    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Issue a signed token carrying the user's public identity.
pub fn issue_token(
    user_id: i64,
    fullname: &str,
    username: &str,
    secret: &str,
    expiration_hours: i64,
) -> Result<String, TokenError> {
    let now = Utc::now();
    let exp = now + Duration::hours(expiration_hours);

    let claims = Claims {
        sub: user_id.to_string(),
        fullname: fullname.to_string(),
        username: username.to_string(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| TokenError::Signing(e.to_string()))
}

/// Decode and verify a token.
///
/// Expiry is checked against the current time even when the signature is
/// valid; there is no revocation list, so expiry is the only way a token
/// stops working. Zero clock leeway: a token is rejected from the moment
/// its `exp` passes, not a minute later.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid(e.to_string()),
    })
}
