use hello_addon_model::{MetaDetail, MetaResponse};
use tracing::debug;

use crate::mount::Resource;
use crate::request::ParsedRequest;
use crate::response::{AddonBody, AddonResponse};
use crate::store::CatalogStore;

use super::{ResourceHandler, preview};

/// Detailed meta for a single item.
///
/// An unknown id under a known type is a successful response with a `null`
/// meta, not a 404.
#[derive(Debug, Default, Clone, Copy)]
pub struct MetaHandler;

impl ResourceHandler for MetaHandler {
    fn resource(&self) -> Resource {
        Resource::Meta
    }

    fn respond(&self, store: &CatalogStore, path: &str) -> Option<AddonResponse> {
        let request = ParsedRequest::parse(path);
        let content_type = request.content_type()?;
        store.items(content_type)?;

        let meta = request
            .id()
            .and_then(|id| store.find_item(content_type, id))
            .map(|item| MetaDetail {
                preview: preview(store, content_type, item),
                extras: item.extras.clone(),
            });
        debug!(content_type, id = ?request.id(), found = meta.is_some(), "meta lookup");

        Some(AddonResponse::new(AddonBody::Meta(MetaResponse { meta })))
    }
}
