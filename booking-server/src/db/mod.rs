//! Database Module
//!
//! Embedded SurrealDB (RocksDB backend) holding two tables:
//! `booking` and `review`. Both are schemaless documents; all
//! validation happens in the handlers.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// Open the embedded database at the given path
pub async fn connect(path: &Path) -> Result<Surreal<Db>, AppError> {
    let db = Surreal::new::<RocksDb>(path)
        .await
        .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

    db.use_ns("moon")
        .use_db("booking")
        .await
        .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

    tracing::info!("Database connection established ({})", path.display());
    Ok(db)
}
