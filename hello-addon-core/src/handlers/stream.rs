use hello_addon_model::StreamsResponse;
use tracing::debug;

use crate::mount::Resource;
use crate::request::ParsedRequest;
use crate::response::{AddonBody, AddonResponse};
use crate::store::CatalogStore;

use super::ResourceHandler;

/// Streams for an item or episode id, verbatim and in stored order.
///
/// Lookups are independent of the catalog: an id with no entry gets an empty
/// list whether or not the item exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct StreamHandler;

impl ResourceHandler for StreamHandler {
    fn resource(&self) -> Resource {
        Resource::Stream
    }

    fn respond(&self, store: &CatalogStore, path: &str) -> Option<AddonResponse> {
        let request = ParsedRequest::parse(path);
        let content_type = request.content_type()?;
        let table = store.stream_table(content_type)?;

        let streams = request
            .id()
            .and_then(|id| table.get(id))
            .cloned()
            .unwrap_or_default();
        debug!(
            content_type,
            id = ?request.id(),
            count = streams.len(),
            preferred = ?streams.first().map(|stream| stream.source.kind()),
            "stream lookup"
        );

        Some(AddonResponse::new(AddonBody::Streams(StreamsResponse { streams })))
    }
}
