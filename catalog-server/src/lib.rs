//! Catalog Server - product catalog admin backend
//!
//! # Module structure
//!
//! ```text
//! catalog-server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── api/           # Routes and handlers
//! ├── services/      # Catalog orchestration, asset store
//! ├── db/            # Embedded SurrealDB, models, repositories
//! └── utils/         # Errors, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

pub use core::{Config, Server, ServerState};
pub use services::{AssetStoreService, CatalogService};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env, make sure the data directory exists, start logging
pub fn setup_environment() -> Result<Config, AppError> {
    dotenv::dotenv().ok();

    let config = Config::from_env();

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)
        .map_err(|e| AppError::internal(format!("Failed to create log directory: {e}")))?;

    let log_dir = if config.is_production() {
        log_dir.to_str().map(|s| s.to_string())
    } else {
        None
    };
    init_logger_with_file(Some(&config.log_level), log_dir.as_deref());

    Ok(config)
}
