//! Application state
//!
//! Store handles over the shared connection pool, passed into handlers
//! through axum's `State` extractor. There is no in-process mutable state:
//! everything lives behind the pool, so the struct is a cheap clone per
//! request.

use crate::books::BookCatalog;
use crate::orders::{OrderService, OrderStore};
use crate::users::UserDirectory;
use sqlx::SqlitePool;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// User directory handle
    pub users: UserDirectory,
    /// Book catalog handle
    pub books: BookCatalog,
    /// Order placement/aggregation service
    pub orders: OrderService,
}

impl AppState {
    /// Build the state from a connected pool
    pub fn new(pool: SqlitePool) -> Self {
        let users = UserDirectory::new(pool.clone());
        let books = BookCatalog::new(pool.clone());
        let orders = OrderService::new(
            users.clone(),
            books.clone(),
            OrderStore::new(pool),
        );
        Self {
            users,
            books,
            orders,
        }
    }
}
