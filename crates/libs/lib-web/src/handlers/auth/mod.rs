//! # Authentication Handlers
//!
//! HTTP request handlers for registration and login.
//!
//! ## Overview
//!
//! - **Register**: validate -> hash -> persist -> respond with the public
//!   user projection.
//! - **Login**: validate -> lookup -> verify -> issue a signed token.
//! - **Me**: echo the authenticated identity (claims injected by
//!   `middleware::mw_auth`).
//!
//! Bodies arrive as raw JSON so the schema evaluator can report every
//! violated field in one response and strip unknown fields before anything
//! touches the store. Password hashing and verification are CPU-bound and
//! run on the blocking thread pool so they never stall unrelated requests.
//!
//! Both login failure modes (unknown username, wrong password) answer with
//! the same generic 401 body; nothing in the response distinguishes them.

use axum::{
    extract::{Json, State},
    http::StatusCode,
    Extension,
};
use lib_auth::{hash_password, issue_token, verify_password, Claims};
use lib_core::dto::{LoginData, LoginResponse, MeResponse, RegisterData, RegisterResponse, UserInfo};
use lib_core::error::AuthError;
use lib_core::model::store::{models::UserForCreate, StoreError, UserRepository};
use lib_core::{Config, DbPool};
use lib_utils::validation::{Rule, Schema};
use serde_json::Value;
use tokio::task;
use tracing::{debug, error, info, warn};

fn register_schema() -> Schema {
    Schema::new()
        .field("fullname", vec![Rule::Required("Full name is required")])
        .field(
            "username",
            vec![
                Rule::Required("Username is required"),
                Rule::MinLength(3, "Username must be at least 3 characters"),
            ],
        )
        .field_untrimmed(
            "password",
            vec![
                Rule::Required("Password is required"),
                Rule::MinLength(6, "Password must be at least 6 characters"),
            ],
        )
}

// No min-length re-check on login: it must accept whatever password was
// valid at registration time.
fn login_schema() -> Schema {
    Schema::new()
        .field("username", vec![Rule::Required("Username is required")])
        .field_untrimmed("password", vec![Rule::Required("Password is required")])
}

/// Registration handler - creates a new user account.
///
/// # Responses
///
/// * `201` - `{success:true, user:{id,fullname,username}}`
/// * `400` - `{success:false, errors:{field:msg}}` on schema violations
/// * `400` - `{success:false, message:"Username already exists"}` on conflict
/// * `500` - hashing or persistence infrastructure fault
pub async fn register(
    State(pool): State<DbPool>,
    State(config): State<Config>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<RegisterResponse>), AuthError> {
    info!("[REGISTER] new registration request");

    let normalized = register_schema().validate(&body).map_err(|errors| {
        warn!(
            "[REGISTER] validation failed: {:?}",
            errors.keys().collect::<Vec<_>>()
        );
        AuthError::Validation(errors)
    })?;

    let data: RegisterData = serde_json::from_value(Value::Object(normalized)).map_err(|e| {
        AuthError::internal(
            format!("normalized payload did not match schema: {e}"),
            config.dev_mode,
        )
    })?;

    debug!("[REGISTER] hashing password for '{}'", data.username);
    let password = data.password;
    let password_hash = task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AuthError::internal(format!("hashing task failed: {e}"), config.dev_mode))?
        .map_err(|e| {
            error!("[REGISTER] password hashing failed: {}", e);
            AuthError::internal(format!("password hashing failed: {e}"), config.dev_mode)
        })?;

    debug!("[REGISTER] persisting user '{}'", data.username);
    let user = match UserRepository::create(
        &pool,
        UserForCreate::new(data.fullname, data.username, password_hash),
    )
    .await
    {
        Ok(user) => user,
        Err(StoreError::UniqueViolation) => {
            warn!("[REGISTER] username already exists");
            return Err(AuthError::Conflict("Username already exists".to_string()));
        }
        Err(StoreError::Db(e)) => {
            error!("[REGISTER] database error: {}", e);
            return Err(AuthError::internal(
                format!("database error: {e}"),
                config.dev_mode,
            ));
        }
    };

    info!(
        "[REGISTER] user created: id={} username={}",
        user.id, user.username
    );

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            user: UserInfo::from(&user),
        }),
    ))
}

/// Login handler - authenticates an existing user and issues a token.
///
/// # Responses
///
/// * `200` - `{success:true, token, user:{id,fullname,username}}`
/// * `400` - `{success:false, errors:{field:msg}}` on schema violations
/// * `401` - `{success:false, message:"Invalid credentials"}` for unknown
///   username and wrong password alike
/// * `500` - lookup or signing infrastructure fault
pub async fn login(
    State(pool): State<DbPool>,
    State(config): State<Config>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<LoginResponse>), AuthError> {
    info!("[LOGIN] login attempt");

    let normalized = login_schema().validate(&body).map_err(|errors| {
        warn!(
            "[LOGIN] validation failed: {:?}",
            errors.keys().collect::<Vec<_>>()
        );
        AuthError::Validation(errors)
    })?;

    let data: LoginData = serde_json::from_value(Value::Object(normalized)).map_err(|e| {
        AuthError::internal(
            format!("normalized payload did not match schema: {e}"),
            config.dev_mode,
        )
    })?;

    let user = match UserRepository::find_by_username(&pool, &data.username).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            warn!("[LOGIN] unknown username '{}'", data.username);
            return Err(AuthError::InvalidCredentials);
        }
        Err(e) => {
            error!("[LOGIN] database error: {}", e);
            return Err(AuthError::internal(
                format!("database error: {e}"),
                config.dev_mode,
            ));
        }
    };

    debug!("[LOGIN] verifying password for '{}'", user.username);
    let password = data.password;
    let digest = user.password_hash.clone();
    let verified = task::spawn_blocking(move || verify_password(&password, &digest))
        .await
        .map_err(|e| {
            AuthError::internal(format!("verification task failed: {e}"), config.dev_mode)
        })?;

    let password_matches = match verified {
        Ok(matches) => matches,
        Err(e) => {
            // A digest we cannot parse counts as a failed verification.
            warn!("[LOGIN] stored digest rejected for '{}': {}", user.username, e);
            false
        }
    };

    if !password_matches {
        warn!("[LOGIN] wrong password for '{}'", user.username);
        return Err(AuthError::InvalidCredentials);
    }

    // Claims carry only the public projection; the digest never leaves the
    // backend, token bodies included.
    let token = issue_token(
        user.id,
        &user.fullname,
        &user.username,
        &config.jwt_secret,
        config.jwt_expiration_hours,
    )
    .map_err(|e| {
        error!("[LOGIN] token signing failed: {}", e);
        AuthError::internal(format!("token signing failed: {e}"), config.dev_mode)
    })?;

    info!(
        "[LOGIN] user authenticated: id={} username={}",
        user.id, user.username
    );

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            success: true,
            token,
            user: UserInfo::from(&user),
        }),
    ))
}

/// Authenticated-identity handler.
///
/// `middleware::mw_auth::require_auth` has already decoded and verified the
/// token; the claims arrive through request extensions.
pub async fn me(Extension(claims): Extension<Claims>) -> Json<MeResponse> {
    Json(MeResponse {
        success: true,
        user: UserInfo {
            id: claims.sub,
            fullname: claims.fullname,
            username: claims.username,
        },
    })
}

#[cfg(test)]
mod tests;
