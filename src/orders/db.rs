//! Order store database operations
//!
//! Orders are persisted as one `orders` row plus one `order_books` row per
//! book reference, preserving request order and multiplicity. Records are
//! immutable once created; there is no update or cancel operation.

use crate::error::AppError;
use crate::orders::models::Order;
use chrono::Utc;
use sqlx::{FromRow, SqlitePool};
use tracing::debug;
use uuid::Uuid;

#[derive(FromRow)]
struct OrderRow {
    id: String,
    user_id: String,
    total_amount: f64,
    created_at: i64,
}

/// Persistence interface for order records
#[derive(Clone)]
pub struct OrderStore {
    pool: SqlitePool,
}

impl OrderStore {
    /// Create a store backed by the shared connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new order and return the full stored record
    ///
    /// Assigns the identifier, writes the order row and its reference rows in
    /// a single transaction, and returns the record as stored.
    pub async fn create(
        &self,
        user_id: &str,
        book_ids: &[String],
        total_amount: f64,
    ) -> Result<Order, AppError> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now().timestamp();

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO orders (id, user_id, total_amount, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(user_id)
        .bind(total_amount)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

        for (position, book_id) in book_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO order_books (order_id, book_id, position) VALUES (?, ?, ?)",
            )
            .bind(&id)
            .bind(book_id)
            .bind(position as i64)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        debug!("Created order {} for user {}", id, user_id);

        Ok(Order {
            id,
            user_id: user_id.to_string(),
            book_ids: book_ids.to_vec(),
            total_amount,
            created_at,
        })
    }

    /// Fetch every stored order, in insertion order
    pub async fn find_all(&self) -> Result<Vec<Order>, AppError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            "SELECT id, user_id, total_amount, created_at FROM orders ORDER BY created_at ASC, rowid ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            let book_ids: Vec<(String,)> = sqlx::query_as(
                "SELECT book_id FROM order_books WHERE order_id = ? ORDER BY position ASC",
            )
            .bind(&row.id)
            .fetch_all(&self.pool)
            .await?;

            orders.push(Order {
                id: row.id,
                user_id: row.user_id,
                book_ids: book_ids.into_iter().map(|(id,)| id).collect(),
                total_amount: row.total_amount,
                created_at: row.created_at,
            });
        }

        Ok(orders)
    }
}
