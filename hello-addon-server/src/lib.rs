//! # hello-addon server
//!
//! Axum host for the add-on. Every request, whatever its method, is handed to
//! the core [`hello_addon_core::Dispatcher`]; this crate only turns the
//! outcome into an HTTP response and owns process concerns (configuration,
//! logging, binding, shutdown).

pub mod app;
pub mod errors;
pub mod handlers;
pub mod infra;

pub use app::create_app;
pub use infra::app_state::AppState;
