//! Resource handlers.
//!
//! Each handler gets one chance to claim a request. Returning `None` passes
//! the request, unchanged, to the next handler in the chain.

mod catalog;
mod manifest;
mod meta;
mod not_found;
mod stream;

pub use catalog::CatalogHandler;
pub use manifest::ManifestHandler;
pub use meta::MetaHandler;
pub use not_found::NotFoundHandler;
pub use stream::StreamHandler;

use std::fmt::Debug;

use hello_addon_model::{CatalogItem, ContentType, MetaPreview};

use crate::mount::{Mount, Resource};
use crate::response::AddonResponse;
use crate::store::CatalogStore;

/// One link of the dispatch chain.
pub trait ResourceHandler: Debug + Send + Sync {
    /// Resource family whose mount this handler serves.
    fn resource(&self) -> Resource;

    /// Answers a mount-relative path, or declines with `None`.
    fn respond(&self, store: &CatalogStore, path: &str) -> Option<AddonResponse>;

    /// Answers when `mount` selects this handler's resource, declines
    /// otherwise.
    fn handle(&self, store: &CatalogStore, mount: Option<Mount<'_>>) -> Option<AddonResponse> {
        let mount = mount.filter(|mount| mount.resource == self.resource())?;
        self.respond(store, mount.path)
    }
}

fn preview(store: &CatalogStore, content_type: &str, item: &CatalogItem) -> MetaPreview {
    MetaPreview {
        id: item.id.clone(),
        content_type: ContentType::from(content_type),
        name: item.name.clone(),
        genres: item.genres.clone(),
        poster: store.poster_url(&item.id),
    }
}
