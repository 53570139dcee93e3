//! # User Repository
//!
//! Database access layer for user records.
//!
//! The repository maps the store's UNIQUE constraint violation to a distinct
//! [`StoreError::UniqueViolation`] so handlers can answer a duplicate
//! registration with a conflict response instead of a generic failure.

use super::models::{User, UserForCreate};
use super::DbPool;
use sqlx::query_as;
use thiserror::Error;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A UNIQUE constraint rejected the insert (username already taken).
    #[error("username already exists")]
    UniqueViolation,

    /// Any other database failure.
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// User repository for database operations.
pub struct UserRepository;

impl UserRepository {
    /// Find a user by their username.
    pub async fn find_by_username(
        pool: &DbPool,
        username: &str,
    ) -> Result<Option<User>, StoreError> {
        let user = query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Insert a new user and return the stored record.
    ///
    /// # Errors
    ///
    /// * [`StoreError::UniqueViolation`] - the username is already taken
    /// * [`StoreError::Db`] - any other database failure
    pub async fn create(pool: &DbPool, user_data: UserForCreate) -> Result<User, StoreError> {
        let result = sqlx::query(
            "INSERT INTO users (fullname, username, password_hash) VALUES (?, ?, ?)",
        )
        .bind(&user_data.fullname)
        .bind(&user_data.username)
        .bind(&user_data.password_hash)
        .execute(pool)
        .await
        .map_err(into_store_error)?;

        let id = result.last_insert_rowid();

        let user = query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await?;

        Ok(user)
    }
}

fn into_store_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.kind() == sqlx::error::ErrorKind::UniqueViolation {
            return StoreError::UniqueViolation;
        }
    }
    StoreError::Db(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    // One persistent connection: each pooled connection to `:memory:`
    // would see its own empty database.
    async fn test_pool() -> DbPool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool should connect");
        crate::model::store::init_db(&pool)
            .await
            .expect("schema setup should succeed");
        pool
    }

    #[tokio::test]
    async fn test_create_and_find_roundtrip() {
        let pool = test_pool().await;

        let created = UserRepository::create(
            &pool,
            UserForCreate::new("Ann Lee".into(), "annlee".into(), "digest".into()),
        )
        .await
        .expect("insert should succeed");

        let found = UserRepository::find_by_username(&pool, "annlee")
            .await
            .expect("lookup should succeed")
            .expect("user should exist");

        assert_eq!(found.id, created.id);
        assert_eq!(found.fullname, "Ann Lee");
        assert_eq!(found.password_hash, "digest");
    }

    #[tokio::test]
    async fn test_duplicate_username_is_a_distinct_error() {
        let pool = test_pool().await;

        UserRepository::create(
            &pool,
            UserForCreate::new("Ann Lee".into(), "annlee".into(), "digest".into()),
        )
        .await
        .expect("first insert should succeed");

        let result = UserRepository::create(
            &pool,
            UserForCreate::new("Other Ann".into(), "annlee".into(), "digest2".into()),
        )
        .await;

        assert!(matches!(result, Err(StoreError::UniqueViolation)));

        // No second record was created.
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = ?")
            .bind("annlee")
            .fetch_one(&pool)
            .await
            .expect("count should succeed");
        assert_eq!(count.0, 1);
    }

    #[tokio::test]
    async fn test_find_absent_user_is_none() {
        let pool = test_pool().await;

        let found = UserRepository::find_by_username(&pool, "ghost")
            .await
            .expect("lookup should succeed");
        assert!(found.is_none());
    }
}
