//! User directory data models

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// An account record in the user directory
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique identifier for the user
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address (unique across the directory)
    pub email: String,
    /// Salted password hash
    #[serde(skip_serializing)] // Never send password hash to client
    pub password_hash: String,
    /// Whether the user has administrative privileges
    pub is_admin: bool,
    /// When the account was created (Unix timestamp)
    pub created_at: i64,
}

impl User {
    /// Create a new user record with a freshly generated timestamp
    pub fn new(id: String, name: String, email: String, password_hash: String) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            is_admin: false,
            created_at: Utc::now().timestamp(),
        }
    }
}

/// Public view of a user, safe to embed in API responses
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserProfile {
    /// Unique identifier for the user
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Whether the user has administrative privileges
    pub is_admin: bool,
    /// When the account was created (Unix timestamp)
    pub created_at: i64,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}
