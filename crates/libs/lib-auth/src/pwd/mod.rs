//! # Password Hashing
//!
//! Password hashing and verification using bcrypt.
//!
//! Every digest embeds its own random salt, so hashing the same password
//! twice yields different digests. Verification parses the salt and cost
//! back out of the digest; the comparison itself is constant-time inside
//! the bcrypt library.

use thiserror::Error;

/// Fixed bcrypt cost factor (2^10 rounds).
///
/// High enough to resist offline brute force, low enough to keep
/// interactive login latency reasonable.
pub const HASH_COST: u32 = 10;

/// Errors from password hashing and verification.
#[derive(Debug, Error)]
pub enum PwdError {
    /// The hashing operation itself failed (entropy or library fault).
    #[error("failed to hash password: {0}")]
    Hash(String),

    /// The stored digest could not be parsed as a bcrypt hash.
    ///
    /// Callers must treat this as verification failure, never as a match.
    #[error("malformed password digest: {0}")]
    InvalidDigest(String),
}

/// Hash a plaintext password into a salted bcrypt digest.
///
/// Length policy lives in the validation schemas, not here: login has to
/// accept whatever was chosen at registration time.
pub fn hash_password(password: &str) -> Result<String, PwdError> {
    bcrypt::hash(password, HASH_COST).map_err(|e| PwdError::Hash(e.to_string()))
}

/// Verify a plaintext password against a stored bcrypt digest.
///
/// Returns `Ok(false)` on a mismatch. Errors only when the digest itself
/// is malformed.
pub fn verify_password(password: &str, digest: &str) -> Result<bool, PwdError> {
    bcrypt::verify(password, digest).map_err(|e| PwdError::InvalidDigest(e.to_string()))
}
