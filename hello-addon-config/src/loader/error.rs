use std::path::PathBuf;

use hello_addon_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("server host must not be empty")]
    EmptyHost,

    #[error("server port must be non-zero")]
    InvalidPort,

    #[error("log filter must not be empty")]
    EmptyLogFilter,

    #[error(transparent)]
    InvalidPosterTemplate(#[from] StoreError),
}
