//! Store endpoint configuration.

use std::time::Duration;

/// Environment variable overriding the query endpoint.
pub const ENV_QUERY_URL: &str = "CITYGRAPH_QUERY_URL";
/// Environment variable overriding the update endpoint.
pub const ENV_UPDATE_URL: &str = "CITYGRAPH_UPDATE_URL";

/// Configuration for the SPARQL protocol client.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// SPARQL query endpoint (SELECT/ASK)
    pub query_endpoint: String,
    /// SPARQL update endpoint (INSERT/DELETE)
    pub update_endpoint: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Short timeout used by the connection check
    pub check_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            query_endpoint: "http://localhost:3030/smartcity/query".to_string(),
            update_endpoint: "http://localhost:3030/smartcity/update".to_string(),
            timeout: Duration::from_secs(30),
            check_timeout: Duration::from_secs(5),
        }
    }
}

impl StoreConfig {
    /// Build a config for a dataset root, appending the protocol paths.
    ///
    /// `base_url` is e.g. `http://localhost:3030/smartcity`; trailing slashes
    /// are stripped.
    pub fn for_dataset(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            query_endpoint: format!("{base}/query"),
            update_endpoint: format!("{base}/update"),
            ..Self::default()
        }
    }

    /// Defaults overridden from the environment where set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(ENV_QUERY_URL) {
            if !url.is_empty() {
                config.query_endpoint = url;
            }
        }
        if let Ok(url) = std::env::var(ENV_UPDATE_URL) {
            if !url.is_empty() {
                config.update_endpoint = url;
            }
        }
        config
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
