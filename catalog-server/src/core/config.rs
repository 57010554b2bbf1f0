/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 5000 | HTTP API port |
/// | DATA_DIR | ./data | Database and log storage |
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Tracing level filter |
/// | ASSET_UPLOAD_URL | (hosted CDN) | Media CDN upload endpoint |
/// | ASSET_API_URL | (hosted CDN) | Media CDN management API |
/// | ASSET_PRIVATE_KEY | (empty) | Media CDN private API key |
/// | ASSET_FOLDER | catalog | Remote folder for uploads |
/// | CATEGORY_DELETE_SCOPE | affected | `affected` or `all` |
///
/// # Example
///
/// ```ignore
/// DATA_DIR=/var/lib/catalog HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Directory holding the embedded database and log files
    pub data_dir: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Tracing level filter
    pub log_level: String,
    /// Media CDN settings
    pub asset_store: AssetStoreConfig,
    /// Which products a category delete rewrites
    pub category_delete_scope: CategoryDeleteScope,
}

/// Media CDN connection settings
#[derive(Debug, Clone)]
pub struct AssetStoreConfig {
    pub upload_url: String,
    pub api_url: String,
    pub private_key: String,
    pub folder: String,
}

/// Scope of the category delete cascade
///
/// Deleting a category reassigns products to "Uncategorized". `Affected`
/// rewrites only the products that referenced the deleted category;
/// `All` rewrites every product regardless of its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryDeleteScope {
    #[default]
    Affected,
    All,
}

impl CategoryDeleteScope {
    fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "all" => Self::All,
            _ => Self::Affected,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            asset_store: AssetStoreConfig {
                upload_url: std::env::var("ASSET_UPLOAD_URL")
                    .unwrap_or_else(|_| "https://upload.imagekit.io/api/v1/files/upload".into()),
                api_url: std::env::var("ASSET_API_URL")
                    .unwrap_or_else(|_| "https://api.imagekit.io/v1".into()),
                private_key: std::env::var("ASSET_PRIVATE_KEY").unwrap_or_default(),
                folder: std::env::var("ASSET_FOLDER").unwrap_or_else(|_| "catalog".into()),
            },
            category_delete_scope: std::env::var("CATEGORY_DELETE_SCOPE")
                .map(|v| CategoryDeleteScope::parse(&v))
                .unwrap_or_default(),
        }
    }

    /// Override data_dir and port, used by tests
    pub fn with_overrides(data_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Database directory under the data dir
    pub fn database_dir(&self) -> std::path::PathBuf {
        std::path::PathBuf::from(&self.data_dir).join("database")
    }

    /// Log directory under the data dir
    pub fn log_dir(&self) -> std::path::PathBuf {
        std::path::PathBuf::from(&self.data_dir).join("logs")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
