pub mod addon;

pub use addon::{addon_handler, into_http_response};
