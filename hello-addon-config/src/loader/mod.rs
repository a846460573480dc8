pub mod error;

use std::fs;
use std::path::{Path, PathBuf};

use hello_addon_core::PosterTemplate;
use tracing::debug;

use crate::constants::{DEFAULT_CONFIG_FILE, env as env_keys};
use crate::models::sources::{EnvConfig, FileConfig};
use crate::models::{CatalogConfig, Config, ConfigMetadata, LoggingConfig, ServerConfig};
use crate::validation::{ConfigWarning, ConfigWarnings};

use error::ConfigLoadError;

/// Loaded configuration plus anything worth reporting once logging is up.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigLoaderOptions {
    /// Explicit TOML file; it must exist when given.
    pub config_path: Option<PathBuf>,
    /// Explicit `.env` file; defaults to `.env` in the working directory.
    pub env_file: Option<PathBuf>,
    /// Skip `.env` loading entirely.
    pub skip_env_file: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
    env: Option<EnvConfig>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options, env: None }
    }

    /// Use a fixed environment snapshot instead of the process environment.
    /// No `.env` file is read in this mode.
    pub fn with_env(mut self, env: EnvConfig) -> Self {
        self.env = Some(env);
        self
    }

    pub fn load(self) -> Result<ConfigLoad, ConfigLoadError> {
        let mut warnings = ConfigWarnings::default();
        let mut metadata = ConfigMetadata::default();

        let env = match self.env {
            Some(env) => env,
            None => {
                if !self.options.skip_env_file {
                    metadata.env_file_loaded =
                        load_env_file(self.options.env_file.as_deref(), &mut warnings);
                }
                EnvConfig::gather()
            }
        };

        let config_path = self
            .options
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());
        let file = match config_path {
            Some(path) => {
                let file = read_config_file(&path)?;
                metadata.config_path = Some(path);
                file
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    let file = read_config_file(&default_path)?;
                    metadata.config_path = Some(default_path);
                    file
                } else {
                    FileConfig::default()
                }
            }
        };

        let config = compose(file, env, metadata, &mut warnings)?;
        Ok(ConfigLoad { config, warnings })
    }
}

fn load_env_file(path: Option<&Path>, warnings: &mut ConfigWarnings) -> bool {
    let result = match path {
        Some(path) => dotenvy::from_path(path).map(|_| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match result {
        Ok(path) => {
            debug!(path = %path.display(), "loaded env file");
            true
        }
        Err(err) if err.not_found() && path.is_none() => false,
        Err(err) => {
            warnings.push(ConfigWarning::EnvFileUnreadable {
                path: path
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| ".env".to_string()),
                reason: err.to_string(),
            });
            false
        }
    }
}

fn read_config_file(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn compose(
    file: FileConfig,
    env: EnvConfig,
    metadata: ConfigMetadata,
    warnings: &mut ConfigWarnings,
) -> Result<Config, ConfigLoadError> {
    let defaults = Config::default();

    let env_port = env.server_port.and_then(|raw| match raw.trim().parse::<u16>() {
        Ok(port) => Some(port),
        Err(_) => {
            warnings.push(ConfigWarning::IgnoredEnvValue {
                key: env_keys::SERVER_PORT,
                value: raw,
                reason: "not a port number",
            });
            None
        }
    });

    let server = ServerConfig {
        host: env
            .server_host
            .or(file.server.host)
            .unwrap_or(defaults.server.host),
        port: env_port.or(file.server.port).unwrap_or(defaults.server.port),
    };
    server.validate()?;

    let poster_url_template = match env
        .poster_url_template
        .or(file.catalog.poster_url_template)
    {
        Some(template) => PosterTemplate::new(template)?,
        None => defaults.catalog.poster_url_template,
    };
    let catalog = CatalogConfig {
        path: env.catalog_path.or(file.catalog.path),
        poster_url_template,
    };

    let logging = LoggingConfig {
        filter: env
            .log_filter
            .or(file.logging.filter)
            .unwrap_or(defaults.logging.filter),
    };
    if logging.filter.trim().is_empty() {
        return Err(ConfigLoadError::EmptyLogFilter);
    }

    Ok(Config {
        server,
        catalog,
        logging,
        metadata,
    })
}
