use std::fs;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::services::{AssetStoreService, CatalogService};
use crate::utils::AppError;

/// Server state shared across all handlers
///
/// Cloning is cheap; every service holds its internals behind shared
/// handles.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub catalog: CatalogService,
}

impl ServerState {
    /// Initialize state: data directory, database, then services
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_dir = config.database_dir();
        fs::create_dir_all(&db_dir)
            .map_err(|e| AppError::internal(format!("Failed to create data directory: {e}")))?;

        let db_service = DbService::new(&db_dir.join("catalog.db")).await?;
        let db = db_service.db;

        let assets = AssetStoreService::new(config.asset_store.clone());
        let catalog = CatalogService::new(db.clone(), assets, config.category_delete_scope);

        Ok(Self {
            config: config.clone(),
            db,
            catalog,
        })
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
