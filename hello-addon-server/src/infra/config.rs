pub use hello_addon_config::{
    CatalogConfig, Config, ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions,
    ConfigMetadata, ConfigWarning, ConfigWarnings, LoggingConfig, ServerConfig, loader, models,
};
