// User directory module
// Account records, lookup interface, and password hashing

pub mod db;
pub mod models;
pub mod password;

pub use db::UserDirectory;
pub use models::{User, UserProfile};
