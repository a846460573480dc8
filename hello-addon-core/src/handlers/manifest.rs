use crate::mount::Resource;
use crate::response::{AddonBody, AddonResponse};
use crate::store::CatalogStore;

use super::ResourceHandler;

/// Serves the manifest, and only for an empty path.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManifestHandler;

impl ResourceHandler for ManifestHandler {
    fn resource(&self) -> Resource {
        Resource::Manifest
    }

    fn respond(&self, store: &CatalogStore, path: &str) -> Option<AddonResponse> {
        if !path.is_empty() {
            return None;
        }
        Some(AddonResponse::new(AddonBody::Manifest(store.manifest().clone())))
    }
}
