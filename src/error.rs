//! Error types and error handling for the service
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// All errors that can occur in the application are represented by this enum.
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// The referenced user does not exist in the directory
    #[error("User not found")]
    UserNotFound(String),

    /// A book with the given ID was not found in the catalog
    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// One or more order book references did not resolve in the catalog
    #[error("Books not found")]
    BooksNotFound {
        /// Requested references that did not resolve
        missing: Vec<String>,
    },

    /// An order was placed with an empty book list
    #[error("Order must contain at least one book")]
    EmptyOrder,

    /// Request payload failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Registration attempted with an email that is already taken
    #[error("Email already registered")]
    EmailTaken(String),

    /// Login credentials did not match a directory record
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The persistence layer failed (connection, query, or transaction error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::UserNotFound(_) => StatusCode::NOT_FOUND,
            AppError::BookNotFound(_) => StatusCode::NOT_FOUND,
            AppError::BooksNotFound { .. } => StatusCode::BAD_REQUEST,
            AppError::EmptyOrder => StatusCode::BAD_REQUEST,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::EmailTaken(_) => StatusCode::CONFLICT,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
