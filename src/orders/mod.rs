// Order module
// Order records, the order store, and the placement/aggregation service

pub mod db;
pub mod models;
pub mod service;

pub use db::OrderStore;
pub use models::{EnrichedOrder, Order};
pub use service::OrderService;
