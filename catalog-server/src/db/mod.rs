//! Database Module
//!
//! Embedded SurrealDB storage (RocksDB engine) and the repository layer.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "catalog";
const DATABASE: &str = "catalog";

/// Database service that owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at `path` and select the catalog namespace
    pub async fn new(path: &Path) -> Result<Self, AppError> {
        let path_str = path.to_string_lossy();
        let db: Surreal<Db> = Surreal::new::<RocksDb>(path_str.as_ref())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(path = %path.display(), "Database connection established");

        Ok(Self { db })
    }
}
