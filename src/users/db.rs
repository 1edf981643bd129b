//! User directory database operations
//!
//! The order service consumes this store strictly through [`UserDirectory::find_by_id`];
//! the remaining operations back the registration and login endpoints.

use crate::error::AppError;
use crate::users::models::User;
use sqlx::SqlitePool;
use tracing::debug;

/// Lookup and persistence interface for account records
#[derive(Clone)]
pub struct UserDirectory {
    pool: SqlitePool,
}

impl UserDirectory {
    /// Create a directory backed by the shared connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Resolve a user by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, is_admin, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Resolve a user by email address
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, is_admin, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Insert a new account record
    pub async fn insert(&self, user: &User) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO users (id, name, email, password_hash, is_admin, created_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.is_admin)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        debug!("Registered user: {}", user.id);
        Ok(())
    }
}
