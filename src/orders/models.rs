//! Order data models
//!
//! An order links one user to an ordered list of book references with a total
//! computed at placement time. The total is a point-in-time snapshot: it is
//! never recomputed, even if catalog prices change afterwards.

use crate::books::Book;
use crate::users::UserProfile;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored order record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    /// Unique identifier for the order
    pub id: String,
    /// Reference to the user who placed the order
    #[serde(rename = "user")]
    pub user_id: String,
    /// Book references in request order; duplicates appear once per occurrence
    #[serde(rename = "books")]
    pub book_ids: Vec<String>,
    /// Sum of the referenced books' prices at placement time
    pub total_amount: f64,
    /// When the order was placed (Unix timestamp)
    pub created_at: i64,
}

/// An order with its references resolved to full records
///
/// A reference that no longer resolves enriches to `null` in its position
/// rather than failing the listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EnrichedOrder {
    /// Unique identifier for the order
    pub id: String,
    /// Resolved user record, or `null` if the user no longer exists
    pub user: Option<UserProfile>,
    /// Resolved book records, position-aligned with the stored references
    pub books: Vec<Option<Book>>,
    /// Total captured when the order was placed
    pub total_amount: f64,
    /// When the order was placed (Unix timestamp)
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_wire_field_names() {
        let order = Order {
            id: "o-1".to_string(),
            user_id: "u-1".to_string(),
            book_ids: vec!["b-1".to_string(), "b-1".to_string()],
            total_amount: 100.0,
            created_at: 0,
        };
        let json = serde_json::to_value(&order).unwrap();
        // Wire format matches the request vocabulary: "user" and "books".
        assert_eq!(json["user"], "u-1");
        assert_eq!(json["books"].as_array().unwrap().len(), 2);
        assert_eq!(json["total_amount"], 100.0);
    }
}
