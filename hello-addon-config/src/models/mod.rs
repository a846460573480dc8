pub mod sources;

use std::path::PathBuf;

use hello_addon_core::PosterTemplate;

use crate::constants::{DEFAULT_HOST, DEFAULT_LOG_FILTER, DEFAULT_PORT};
use crate::loader::error::ConfigLoadError;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `(host, port)` for `TcpListener::bind`; host names resolve at bind time.
    pub fn bind_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    /// Rejects a blank host or port 0.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.host.trim().is_empty() {
            return Err(ConfigLoadError::EmptyHost);
        }
        if self.port == 0 {
            return Err(ConfigLoadError::InvalidPort);
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Where the catalog comes from and how posters are addressed.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// JSON catalog document replacing the built-in sample data.
    pub path: Option<PathBuf>,
    pub poster_url_template: PosterTemplate,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives; `RUST_LOG` still wins.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
