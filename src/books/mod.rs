// Book catalog module
// Catalog records and the lookup/query interface consumed by the order service

pub mod db;
pub mod models;

pub use db::BookCatalog;
pub use models::Book;
