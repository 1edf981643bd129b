//! Library Manager Backend Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod books;
pub mod config;
pub mod db;
pub mod doc;
pub mod error;
pub mod orders;
pub mod state;
pub mod users;
