//! Order API handlers
//!
//! The POST path validates against the user directory and book catalog
//! before writing; the GET path returns every stored order joined with its
//! resolved user and book records.

use crate::error::AppError;
use crate::orders::{EnrichedOrder, Order};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Place order request
#[derive(Debug, Deserialize, ToSchema)]
pub struct PlaceOrderRequest {
    /// Identifier of the user placing the order
    pub user: String,
    /// Book identifiers, in order; duplicates are allowed
    pub books: Vec<String>,
}

/// Place order response
#[derive(Debug, Serialize, ToSchema)]
pub struct PlaceOrderResponse {
    /// Human-readable message
    pub message: String,
    /// The stored order, including its generated identifier
    pub order: Order,
}

/// POST /api/order - Place a new order
#[utoipa::path(
    post,
    path = "/api/order",
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = PlaceOrderResponse),
        (status = 400, description = "Books not found or empty order"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Unexpected error"),
    ),
    tag = "orders"
)]
pub async fn place_order(
    State(state): State<AppState>,
    Json(request): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<PlaceOrderResponse>), AppError> {
    let order = state.orders.place_order(&request.user, &request.books).await?;

    Ok((
        StatusCode::CREATED,
        Json(PlaceOrderResponse {
            message: "Order placed successfully".to_string(),
            order,
        }),
    ))
}

/// GET /api/orders - List all orders with resolved user and book data
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "All orders, enriched", body = [EnrichedOrder]),
        (status = 500, description = "Unexpected error"),
    ),
    tag = "orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<EnrichedOrder>>, AppError> {
    let orders = state.orders.list_orders_enriched().await?;
    Ok(Json(orders))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::Book;
    use crate::users::User;
    use tempfile::TempDir;

    async fn create_test_state() -> (AppState, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let pool = crate::db::connect(db_path.to_str().unwrap())
            .await
            .expect("Failed to create test database");
        (AppState::new(pool), temp_dir)
    }

    async fn seed_user(state: &AppState, id: &str) {
        let user = User::new(
            id.to_string(),
            "Reader".to_string(),
            format!("{id}@example.com"),
            "salt$hash".to_string(),
        );
        state.users.insert(&user).await.unwrap();
    }

    async fn seed_book(state: &AppState, id: &str, price: f64) {
        let book = Book::new(
            id.to_string(),
            format!("Title {id}"),
            "Author".to_string(),
            "Fiction".to_string(),
            price,
            5,
        );
        state.books.insert(&book).await.unwrap();
    }

    #[tokio::test]
    async fn test_place_order_created() {
        let (state, _temp_dir) = create_test_state().await;
        seed_user(&state, "u-1").await;
        seed_book(&state, "b-1", 50.0).await;
        seed_book(&state, "b-2", 60.0).await;

        let request = PlaceOrderRequest {
            user: "u-1".to_string(),
            books: vec!["b-1".to_string(), "b-2".to_string()],
        };
        let result = place_order(State(state), Json(request)).await;
        assert!(result.is_ok());
        let (status, response) = result.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(response.message, "Order placed successfully");
        assert_eq!(response.order.total_amount, 110.0);
        assert!(!response.order.id.is_empty());
    }

    #[tokio::test]
    async fn test_place_order_user_not_found() {
        let (state, _temp_dir) = create_test_state().await;
        seed_book(&state, "b-1", 50.0).await;

        let request = PlaceOrderRequest {
            user: "nonexistent".to_string(),
            books: vec!["b-1".to_string()],
        };
        let result = place_order(State(state), Json(request)).await;
        match result.unwrap_err() {
            AppError::UserNotFound(_) => {}
            other => panic!("Expected UserNotFound error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_place_order_books_not_found() {
        let (state, _temp_dir) = create_test_state().await;
        seed_user(&state, "u-1").await;
        seed_book(&state, "b-1", 50.0).await;

        let request = PlaceOrderRequest {
            user: "u-1".to_string(),
            books: vec!["b-1".to_string(), "nonexistent".to_string()],
        };
        let result = place_order(State(state), Json(request)).await;
        match result.unwrap_err() {
            AppError::BooksNotFound { .. } => {}
            other => panic!("Expected BooksNotFound error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_place_order_empty_books_rejected() {
        let (state, _temp_dir) = create_test_state().await;
        seed_user(&state, "u-1").await;

        let request = PlaceOrderRequest {
            user: "u-1".to_string(),
            books: vec![],
        };
        let result = place_order(State(state), Json(request)).await;
        assert!(matches!(result.unwrap_err(), AppError::EmptyOrder));
    }

    #[tokio::test]
    async fn test_list_orders_empty() {
        let (state, _temp_dir) = create_test_state().await;
        let result = list_orders(State(state)).await;
        assert!(result.is_ok());
        assert!(result.unwrap().0.is_empty());
    }

    #[tokio::test]
    async fn test_list_orders_enriched_round_trip() {
        let (state, _temp_dir) = create_test_state().await;
        seed_user(&state, "u-1").await;
        seed_book(&state, "b-1", 50.0).await;
        seed_book(&state, "b-2", 60.0).await;

        let request = PlaceOrderRequest {
            user: "u-1".to_string(),
            books: vec!["b-1".to_string(), "b-2".to_string()],
        };
        place_order(State(state.clone()), Json(request)).await.unwrap();

        let orders = list_orders(State(state)).await.unwrap().0;
        assert_eq!(orders.len(), 1);
        let order = &orders[0];
        assert_eq!(order.total_amount, 110.0);
        assert_eq!(order.user.as_ref().unwrap().id, "u-1");
        assert_eq!(order.books.len(), 2);
        assert_eq!(order.books[0].as_ref().unwrap().id, "b-1");
        assert_eq!(order.books[1].as_ref().unwrap().id, "b-2");
    }

    #[tokio::test]
    async fn test_enriched_order_serializes_null_for_missing_book() {
        let (state, _temp_dir) = create_test_state().await;
        seed_user(&state, "u-1").await;
        seed_book(&state, "b-1", 50.0).await;

        let request = PlaceOrderRequest {
            user: "u-1".to_string(),
            books: vec!["b-1".to_string()],
        };
        place_order(State(state.clone()), Json(request)).await.unwrap();
        state.books.delete("b-1").await.unwrap();

        let orders = list_orders(State(state)).await.unwrap().0;
        let json = serde_json::to_value(&orders[0]).unwrap();
        assert!(json["books"][0].is_null());
        // The snapshot total survives the catalog deletion.
        assert_eq!(json["total_amount"], 50.0);
    }
}
