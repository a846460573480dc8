use hello_addon_model::CatalogResponse;
use tracing::debug;

use crate::mount::Resource;
use crate::request::ParsedRequest;
use crate::response::{AddonBody, AddonResponse};
use crate::store::CatalogStore;

use super::{ResourceHandler, preview};

/// Lists every item of the requested type as previews, in storage order.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogHandler;

impl ResourceHandler for CatalogHandler {
    fn resource(&self) -> Resource {
        Resource::Catalog
    }

    fn respond(&self, store: &CatalogStore, path: &str) -> Option<AddonResponse> {
        let request = ParsedRequest::parse(path);
        let content_type = request.content_type()?;
        let items = store.items(content_type)?;

        let metas: Vec<_> = items
            .iter()
            .map(|item| preview(store, content_type, item))
            .collect();
        debug!(content_type, count = metas.len(), "catalog listed");

        Some(AddonResponse::new(AddonBody::Catalog(CatalogResponse { metas })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metas(response: AddonResponse) -> Vec<hello_addon_model::MetaPreview> {
        match response.body {
            AddonBody::Catalog(catalog) => catalog.metas,
            other => panic!("expected catalog body, got {other:?}"),
        }
    }

    #[test]
    fn lists_every_item_of_the_type_in_order() {
        let store = CatalogStore::sample().unwrap();

        for content_type in ["movie", "series"] {
            let listed = metas(
                CatalogHandler
                    .respond(&store, &format!("/{content_type}/Hello,%20Ruby.json"))
                    .unwrap(),
            );
            let stored = store.items(content_type).unwrap();

            assert_eq!(listed.len(), stored.len());
            for (preview, item) in listed.iter().zip(stored) {
                assert_eq!(preview.id, item.id);
                assert_eq!(preview.name, item.name);
                assert_eq!(preview.genres, item.genres);
                assert_eq!(preview.content_type.as_str(), content_type);
            }
        }
    }

    #[test]
    fn previews_carry_the_formatted_poster() {
        let store = CatalogStore::sample().unwrap();
        let listed = metas(CatalogHandler.respond(&store, "/movie/Hello,%20Ruby.json").unwrap());

        assert_eq!(listed[0].id, "tt0032138");
        assert_eq!(
            listed[0].poster,
            "https://images.metahub.space/poster/medium/tt0032138/img"
        );
    }

    #[test]
    fn catalog_id_is_not_checked() {
        let store = CatalogStore::sample().unwrap();
        let listed = metas(CatalogHandler.respond(&store, "/movie/anything").unwrap());
        assert_eq!(listed.len(), 6);
    }

    #[test]
    fn declines_unknown_or_missing_types() {
        let store = CatalogStore::sample().unwrap();
        assert!(CatalogHandler.respond(&store, "/book/top.json").is_none());
        assert!(CatalogHandler.respond(&store, "").is_none());
    }
}
