//! Database connection setup
//!
//! Builds the SQLite connection pool shared by the user directory, book
//! catalog, and order store, and applies the schema migrations at startup.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Connect to the SQLite database and run migrations
///
/// # Arguments
/// * `db_path` - Path to the SQLite database file (created if missing)
///
/// # Returns
/// * `Ok(SqlitePool)` if successful
/// * `Err(AppError)` if connection or migration failed
pub async fn connect(db_path: &str) -> Result<SqlitePool, AppError> {
    // Ensure parent directory exists
    if let Some(parent) = PathBuf::from(db_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::Internal(anyhow::anyhow!("Failed to create db directory: {}", e))
        })?;
    }

    // SQLite connection string format: sqlite://path/to/db.db
    let connection_string = if db_path.starts_with("sqlite:") {
        db_path.to_string()
    } else {
        format!("sqlite:{}", db_path)
    };

    let options = SqliteConnectOptions::from_str(&connection_string)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid database path: {}", e)))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    info!("Connected to SQLite database at: {}", db_path);

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations
async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    info!("Running database migrations...");

    let migration_sql = include_str!("../migrations/001_create_library.sql");

    // Strip comment lines, then split the script into individual statements.
    let cleaned: String = migration_sql
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("--"))
        .collect::<Vec<_>>()
        .join(" ");

    for statement in cleaned.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        sqlx::query(statement).execute(pool).await.map_err(|e| {
            AppError::Internal(anyhow::anyhow!(
                "Migration failed: {} - Statement: {}",
                e,
                statement.chars().take(100).collect::<String>()
            ))
        })?;
    }

    info!("Database migrations completed successfully");
    Ok(())
}
