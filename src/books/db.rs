//! Book catalog database operations
//!
//! The order service consumes this store through [`BookCatalog::find_by_ids`]
//! (set-membership query, one row per distinct matching id) and
//! [`BookCatalog::find_by_id`]; the remaining operations back the catalog CRUD
//! endpoints.

use crate::books::models::Book;
use crate::error::AppError;
use sqlx::SqlitePool;
use tracing::debug;

const BOOK_COLUMNS: &str = "id, title, author, category, price, quantity, created_at";

/// Lookup and persistence interface for catalog records
#[derive(Clone)]
pub struct BookCatalog {
    pool: SqlitePool,
}

impl BookCatalog {
    /// Create a catalog backed by the shared connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all books in the catalog
    pub async fn find_all(&self) -> Result<Vec<Book>, AppError> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books ORDER BY created_at ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Resolve a book by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Book>, AppError> {
        let book =
            sqlx::query_as::<_, Book>(&format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(book)
    }

    /// Resolve a set of IDs to the matching books
    ///
    /// Returns one row per distinct matching id; requested ids with no match
    /// are simply absent from the result. Callers that need per-reference
    /// resolution must compare against this set themselves.
    pub async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<Book>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql =
            format!("SELECT {BOOK_COLUMNS} FROM books WHERE id IN ({placeholders})");

        let mut query = sqlx::query_as::<_, Book>(&sql);
        for id in ids {
            query = query.bind(id);
        }

        let books = query.fetch_all(&self.pool).await?;
        Ok(books)
    }

    /// Insert a new catalog record
    pub async fn insert(&self, book: &Book) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO books (id, title, author, category, price, quantity, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&book.id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.category)
        .bind(book.price)
        .bind(book.quantity)
        .bind(book.created_at)
        .execute(&self.pool)
        .await?;

        debug!("Added book: {}", book.id);
        Ok(())
    }

    /// Update an existing catalog record
    ///
    /// # Returns
    /// * `true` if a record was updated, `false` if the id did not resolve
    pub async fn update(&self, book: &Book) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE books SET title = ?, author = ?, category = ?, price = ?, quantity = ? WHERE id = ?",
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.category)
        .bind(book.price)
        .bind(book.quantity)
        .bind(&book.id)
        .execute(&self.pool)
        .await?;

        debug!("Updated book: {}", book.id);
        Ok(result.rows_affected() > 0)
    }

    /// Delete a catalog record
    ///
    /// # Returns
    /// * `true` if a record was deleted, `false` if the id did not resolve
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!("Deleted book: {}", id);
        Ok(result.rows_affected() > 0)
    }
}
