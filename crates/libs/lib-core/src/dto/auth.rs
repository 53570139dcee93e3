//! # Authentication DTOs
//!
//! Shapes for `POST /api/register`, `POST /api/login`, and `GET /api/me`.
//!
//! Request bodies are validated from raw JSON (see `lib-utils::validation`)
//! rather than deserialized directly, so that every missing field can be
//! reported at once and unknown fields can be stripped; [`RegisterData`] and
//! [`LoginData`] are the typed forms of the already-normalized records.

use crate::model::store::models::User;
use serde::{Deserialize, Serialize};

/// Normalized registration input, extracted after schema validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterData {
    pub fullname: String,
    pub username: String,
    pub password: String,
}

/// Normalized login input, extracted after schema validation.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub username: String,
    pub password: String,
}

/// Public projection of a user. The password digest never appears here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub fullname: String,
    pub username: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            fullname: user.fullname.clone(),
            username: user.username.clone(),
        }
    }
}

/// Successful registration response (201).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub user: UserInfo,
}

/// Successful login response (200).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: UserInfo,
}

/// Authenticated-identity response for `GET /api/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub success: bool,
    pub user: UserInfo,
}
