//! Book catalog data models

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A book record in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Unique identifier for the book
    pub id: String,
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
    /// When the record was created (Unix timestamp)
    pub created_at: i64,
}

impl Book {
    /// Create a new book record with a freshly generated timestamp
    pub fn new(id: String, title: String, author: String, category: String, price: f64, quantity: i64) -> Self {
        Self {
            id,
            title,
            author,
            category,
            price,
            quantity,
            created_at: Utc::now().timestamp(),
        }
    }

    /// Validate record fields
    ///
    /// # Returns
    /// * `Ok(())` - Record is valid
    /// * `Err(String)` - Human-readable description of the violation
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title cannot be empty".to_string());
        }
        if self.author.trim().is_empty() {
            return Err("Author cannot be empty".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("Price must be a non-negative number".to_string());
        }
        if self.quantity < 0 {
            return Err("Quantity must be a non-negative integer".to_string());
        }
        Ok(())
    }
}
