use axum::Router;
use axum_test::TestServer;
use hello_addon_core::CatalogStore;
use hello_addon_server::{AppState, create_app, infra::config::Config};

// Code is used by test modules, but not in this scope
#[allow(unused)]
pub fn sample_app() -> Router {
    let store = CatalogStore::sample().expect("sample catalog loads");
    create_app(AppState::new(store, Config::default()))
}

#[allow(unused)]
pub fn sample_server() -> TestServer {
    TestServer::new(sample_app()).expect("test server")
}
