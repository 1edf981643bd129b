//! Order placement and aggregation
//!
//! The service validates requests against the user directory and book
//! catalog, computes the order total, persists through the order store, and
//! produces enriched views for retrieval. It only writes to the order store;
//! the directory and catalog are read-only collaborators here.
//!
//! No transaction spans validation and the order write, so a concurrent
//! catalog price change can land between the two; the stored total reflects
//! the prices read during validation.

use crate::books::BookCatalog;
use crate::error::AppError;
use crate::orders::db::OrderStore;
use crate::orders::models::{EnrichedOrder, Order};
use crate::users::{UserDirectory, UserProfile};
use std::collections::HashMap;
use tracing::{info, warn};

/// Order placement and aggregation workflow
#[derive(Clone)]
pub struct OrderService {
    directory: UserDirectory,
    catalog: BookCatalog,
    store: OrderStore,
}

impl OrderService {
    /// Create a service over the directory, catalog, and store handles
    pub fn new(directory: UserDirectory, catalog: BookCatalog, store: OrderStore) -> Self {
        Self {
            directory,
            catalog,
            store,
        }
    }

    /// Place an order for a user over a non-empty list of book references
    ///
    /// Duplicate references are permitted; each occurrence must resolve and
    /// contributes its price to the total once per occurrence. Validation is
    /// per reference against the resolved set, so duplicates cannot produce a
    /// spurious not-found failure from the deduplicating catalog query.
    pub async fn place_order(
        &self,
        user_ref: &str,
        book_refs: &[String],
    ) -> Result<Order, AppError> {
        if book_refs.is_empty() {
            return Err(AppError::EmptyOrder);
        }

        self.directory
            .find_by_id(user_ref)
            .await?
            .ok_or_else(|| AppError::UserNotFound(user_ref.to_string()))?;

        let resolved = self.catalog.find_by_ids(book_refs).await?;
        let by_id: HashMap<&str, f64> = resolved
            .iter()
            .map(|book| (book.id.as_str(), book.price))
            .collect();

        let missing: Vec<String> = book_refs
            .iter()
            .filter(|book_ref| !by_id.contains_key(book_ref.as_str()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            warn!(user_id = %user_ref, missing = ?missing, "Order rejected: unresolved book references");
            return Err(AppError::BooksNotFound { missing });
        }

        let total_amount: f64 = book_refs
            .iter()
            .map(|book_ref| by_id[book_ref.as_str()])
            .sum();

        let order = self.store.create(user_ref, book_refs, total_amount).await?;

        info!(
            order_id = %order.id,
            user_id = %user_ref,
            books = book_refs.len(),
            total_amount,
            "Order placed"
        );

        Ok(order)
    }

    /// Return every stored order with its references resolved to full records
    ///
    /// Full scan, no filtering or pagination. Every book reference is
    /// resolved individually; a reference that no longer exists enriches to
    /// `None` in its position and a missing user enriches to `None`, neither
    /// aborts the listing. A store failure aborts the whole call.
    pub async fn list_orders_enriched(&self) -> Result<Vec<EnrichedOrder>, AppError> {
        let orders = self.store.find_all().await?;

        let mut enriched = Vec::with_capacity(orders.len());
        for order in orders {
            let user = self
                .directory
                .find_by_id(&order.user_id)
                .await?
                .map(UserProfile::from);

            let mut books = Vec::with_capacity(order.book_ids.len());
            for book_id in &order.book_ids {
                books.push(self.catalog.find_by_id(book_id).await?);
            }

            enriched.push(EnrichedOrder {
                id: order.id,
                user,
                books,
                total_amount: order.total_amount,
                created_at: order.created_at,
            });
        }

        Ok(enriched)
    }
}
