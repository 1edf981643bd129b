//! User API handlers
//!
//! Registration, login, and directory lookup. No token or session is issued
//! on login; nothing in this service enforces authorization.

use crate::error::AppError;
use crate::state::AppState;
use crate::users::{password, User, UserProfile};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Registration request
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// Email address (must be unique)
    pub email: String,
    /// Plaintext password, hashed before storage
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Plaintext password
    pub password: String,
}

/// Response wrapping a user profile with a message
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    /// Human-readable message
    pub message: String,
    /// The user record (password hash omitted)
    pub user: UserProfile,
}

/// POST /api/users - Register a new user
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already registered"),
    ),
    tag = "users"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let name = request.name.trim();
    let email = request.email.trim();
    if name.is_empty() {
        return Err(AppError::InvalidInput("Name cannot be empty".to_string()));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::InvalidInput(
            "A valid email address is required".to_string(),
        ));
    }
    if request.password.is_empty() {
        return Err(AppError::InvalidInput(
            "Password cannot be empty".to_string(),
        ));
    }

    // The UNIQUE column is the backstop for the race between this check and
    // the insert.
    if state.users.find_by_email(email).await?.is_some() {
        return Err(AppError::EmailTaken(email.to_string()));
    }

    let user = User::new(
        Uuid::new_v4().to_string(),
        name.to_string(),
        email.to_string(),
        password::hash_password(&request.password),
    );
    state.users.insert(&user).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            message: "User registered successfully".to_string(),
            user: UserProfile::from(user),
        }),
    ))
}

/// POST /api/users/login - Verify credentials
#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = UserResponse),
        (status = 401, description = "Invalid email or password"),
    ),
    tag = "users"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .users
        .find_by_email(request.email.trim())
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !password::verify_password(&request.password, &user.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    Ok(Json(UserResponse {
        message: "Login successful".to_string(),
        user: UserProfile::from(user),
    }))
}

/// GET /api/users/:id - Look up a user in the directory
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User found", body = UserProfile),
        (status = 404, description = "User not found"),
    ),
    tag = "users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserProfile>, AppError> {
    let user = state
        .users
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::UserNotFound(id))?;

    Ok(Json(UserProfile::from(user)))
}
