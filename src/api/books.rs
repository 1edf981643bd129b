//! Book catalog API handlers
//!
//! Contains HTTP request handlers for catalog CRUD operations.

use crate::books::Book;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Create book request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookRequest {
    /// Book title
    pub title: String,
    /// Author name
    pub author: String,
    /// Category the book is shelved under
    pub category: String,
    /// Price (non-negative)
    pub price: f64,
    /// Copies in stock (non-negative)
    pub quantity: i64,
}

/// Update book request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookRequest {
    /// New title (optional)
    pub title: Option<String>,
    /// New author (optional)
    pub author: Option<String>,
    /// New category (optional)
    pub category: Option<String>,
    /// New price (optional)
    pub price: Option<f64>,
    /// New quantity (optional)
    pub quantity: Option<i64>,
}

/// Message response
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
    /// Status indicator (e.g., "ok", "error")
    pub status: String,
}

/// GET /api/books - List all books
#[utoipa::path(
    get,
    path = "/api/books",
    responses((status = 200, description = "All catalog records", body = [Book])),
    tag = "books"
)]
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, AppError> {
    let books = state.books.find_all().await?;
    Ok(Json(books))
}

/// GET /api/books/:id - Get a specific book
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    params(("id" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book found", body = Book),
        (status = 404, description = "Book not found"),
    ),
    tag = "books"
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, AppError> {
    let book = state
        .books
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::BookNotFound(id))?;

    Ok(Json(book))
}

/// POST /api/books - Add a book to the catalog
#[utoipa::path(
    post,
    path = "/api/books",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book added", body = Book),
        (status = 400, description = "Invalid input"),
    ),
    tag = "books"
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(request): Json<CreateBookRequest>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    let book = Book::new(
        Uuid::new_v4().to_string(),
        request.title,
        request.author,
        request.category,
        request.price,
        request.quantity,
    );
    book.validate().map_err(AppError::InvalidInput)?;

    state.books.insert(&book).await?;

    Ok((StatusCode::CREATED, Json(book)))
}

/// PUT /api/books/:id - Update a book
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    params(("id" = String, Path, description = "Book identifier")),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Book not found"),
    ),
    tag = "books"
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateBookRequest>,
) -> Result<Json<Book>, AppError> {
    let mut book = state
        .books
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::BookNotFound(id))?;

    if let Some(title) = request.title {
        book.title = title;
    }
    if let Some(author) = request.author {
        book.author = author;
    }
    if let Some(category) = request.category {
        book.category = category;
    }
    if let Some(price) = request.price {
        book.price = price;
    }
    if let Some(quantity) = request.quantity {
        book.quantity = quantity;
    }

    book.validate().map_err(AppError::InvalidInput)?;
    state.books.update(&book).await?;

    Ok(Json(book))
}

/// DELETE /api/books/:id - Remove a book from the catalog
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    params(("id" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found"),
    ),
    tag = "books"
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.books.delete(&id).await? {
        return Err(AppError::BookNotFound(id));
    }

    Ok(Json(MessageResponse {
        message: "Book deleted successfully".to_string(),
        status: "ok".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_state() -> (AppState, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let pool = crate::db::connect(db_path.to_str().unwrap())
            .await
            .expect("Failed to create test database");
        (AppState::new(pool), temp_dir)
    }

    fn create_request(price: f64) -> CreateBookRequest {
        CreateBookRequest {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            category: "Science Fiction".to_string(),
            price,
            quantity: 4,
        }
    }

    #[tokio::test]
    async fn test_create_and_list_books() {
        let (state, _temp_dir) = create_test_state().await;
        let result = create_book(State(state.clone()), Json(create_request(50.0))).await;
        assert!(result.is_ok());
        let (status, book) = result.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(book.title, "Dune");

        let books = list_books(State(state)).await.unwrap().0;
        assert_eq!(books.len(), 1);
    }

    #[tokio::test]
    async fn test_create_book_negative_price() {
        let (state, _temp_dir) = create_test_state().await;
        let result = create_book(State(state), Json(create_request(-5.0))).await;
        assert!(matches!(result.unwrap_err(), AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_get_book_not_found() {
        let (state, _temp_dir) = create_test_state().await;
        let result = get_book(State(state), Path("nonexistent".to_string())).await;
        assert!(matches!(result.unwrap_err(), AppError::BookNotFound(_)));
    }

    #[tokio::test]
    async fn test_update_book_partial() {
        let (state, _temp_dir) = create_test_state().await;
        let (_, book) = create_book(State(state.clone()), Json(create_request(50.0)))
            .await
            .unwrap();

        let request = UpdateBookRequest {
            title: None,
            author: None,
            category: None,
            price: Some(75.0),
            quantity: None,
        };
        let updated = update_book(State(state.clone()), Path(book.id.clone()), Json(request))
            .await
            .unwrap()
            .0;
        assert_eq!(updated.price, 75.0);
        assert_eq!(updated.title, "Dune");

        let fetched = get_book(State(state), Path(book.id.clone())).await.unwrap().0;
        assert_eq!(fetched.price, 75.0);
    }

    #[tokio::test]
    async fn test_update_book_rejects_negative_quantity() {
        let (state, _temp_dir) = create_test_state().await;
        let (_, book) = create_book(State(state.clone()), Json(create_request(50.0)))
            .await
            .unwrap();

        let request = UpdateBookRequest {
            title: None,
            author: None,
            category: None,
            price: None,
            quantity: Some(-1),
        };
        let result = update_book(State(state), Path(book.id.clone()), Json(request)).await;
        assert!(matches!(result.unwrap_err(), AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_delete_book() {
        let (state, _temp_dir) = create_test_state().await;
        let (_, book) = create_book(State(state.clone()), Json(create_request(50.0)))
            .await
            .unwrap();

        let result = delete_book(State(state.clone()), Path(book.id.clone())).await;
        assert!(result.is_ok());

        let result = get_book(State(state), Path(book.id.clone())).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_delete_book_not_found() {
        let (state, _temp_dir) = create_test_state().await;
        let result = delete_book(State(state), Path("nonexistent".to_string())).await;
        assert!(matches!(result.unwrap_err(), AppError::BookNotFound(_)));
    }
}
