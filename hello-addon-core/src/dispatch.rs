//! Request dispatch.

use std::sync::Arc;

use tracing::debug;

use crate::handlers::{
    CatalogHandler, ManifestHandler, MetaHandler, NotFoundHandler, ResourceHandler,
    StreamHandler,
};
use crate::mount::Mount;
use crate::response::AddonResponse;
use crate::store::CatalogStore;

/// Ordered handler chain over a shared, read-only store.
///
/// Every request passes through the handlers once, in order; the first to
/// answer wins and anything left unclaimed gets the plain-text 404.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    store: Arc<CatalogStore>,
    chain: Arc<[Box<dyn ResourceHandler>]>,
    fallback: NotFoundHandler,
}

impl Dispatcher {
    /// Standard chain: manifest, catalog, meta, stream.
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self::with_chain(
            store,
            vec![
                Box::new(ManifestHandler),
                Box::new(CatalogHandler),
                Box::new(MetaHandler),
                Box::new(StreamHandler),
            ],
        )
    }

    /// Custom chain, walked in the given order.
    pub fn with_chain(store: Arc<CatalogStore>, chain: Vec<Box<dyn ResourceHandler>>) -> Self {
        Self {
            store,
            chain: chain.into(),
            fallback: NotFoundHandler,
        }
    }

    /// Resolves `path` to exactly one response; never fails.
    pub fn dispatch(&self, path: &str) -> AddonResponse {
        let mount = Mount::resolve(path);

        for handler in self.chain.iter() {
            if let Some(response) = handler.handle(&self.store, mount) {
                debug!(path, resource = %handler.resource(), "request handled");
                return response;
            }
        }

        debug!(path, "no handler matched");
        self.fallback.respond()
    }
}
