use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{handlers::addon_handler, infra::app_state::AppState};

/// Builds the router. All routing happens in the core dispatcher, so the
/// router is just a fallback plus tracing.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .fallback(addon_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
