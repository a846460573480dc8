//! Configuration for hello-addon.
//!
//! Values are layered, lowest precedence first: built-in defaults, an
//! optional TOML file, then `.env` and the process environment. The server
//! applies its CLI flags on top of the loaded [`Config`].

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError};
pub use models::{CatalogConfig, Config, ConfigMetadata, LoggingConfig, ServerConfig};
pub use validation::{ConfigWarning, ConfigWarnings};
