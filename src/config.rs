use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::seed::DEFAULT_API_KEY;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub sessions: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory of presentation assets served for unmatched paths
    pub static_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file; the bundled catalog is used when unset
    pub path: Option<String>,
    pub default_api: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub ttl_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            static_dir: None,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            default_api: DEFAULT_API_KEY.to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { ttl_secs: 3600 }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        Self::layered(environment())
    }

    fn layered(environment: config::Environment) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        config = config.add_source(config::File::with_name("config").required(false));

        // Add environment variables
        config = config.add_source(environment);

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.sessions.ttl_secs)
    }
}

/// Variables with prefix "APIREF_" and "__" between levels, e.g. APIREF_SERVER__PORT
fn environment() -> config::Environment {
    config::Environment::with_prefix("APIREF")
        .separator("__")
        .prefix_separator("_")
}
