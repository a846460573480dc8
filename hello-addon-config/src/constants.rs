pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 7000;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=warn";

/// Config file picked up from the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "hello-addon.toml";

pub mod env {
    pub const CONFIG_PATH: &str = "HELLO_ADDON_CONFIG";
    pub const SERVER_HOST: &str = "SERVER_HOST";
    pub const SERVER_PORT: &str = "SERVER_PORT";
    pub const CATALOG_PATH: &str = "CATALOG_PATH";
    pub const POSTER_URL_TEMPLATE: &str = "POSTER_URL_TEMPLATE";
    pub const LOG_FILTER: &str = "LOG_FILTER";
}
