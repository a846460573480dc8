use std::{fmt, sync::Arc};

use hello_addon_core::{CatalogStore, Dispatcher};

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: CatalogStore, config: Config) -> Self {
        Self {
            dispatcher: Dispatcher::new(Arc::new(store)),
            config: Arc::new(config),
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
