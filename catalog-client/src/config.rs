//! Client configuration

/// Connection settings for the catalog API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the catalog server, e.g. `http://localhost:5000`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }
}
