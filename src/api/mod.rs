//! API module
//!
//! Contains HTTP request handlers for the user, catalog, and order endpoints

pub mod books;
pub mod orders;
pub mod users;
