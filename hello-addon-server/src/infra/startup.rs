use hello_addon_core::{CatalogStore, StoreError};
use tracing::{info, warn};

use crate::infra::config::CatalogConfig;

/// Builds the store once, before any request is served.
pub fn load_store(config: &CatalogConfig) -> Result<CatalogStore, StoreError> {
    let store = match &config.path {
        Some(path) => {
            info!(path = %path.display(), "loading catalog file");
            CatalogStore::from_path(path)?
        }
        None => CatalogStore::sample()?,
    };
    Ok(store.with_poster_template(config.poster_url_template.clone()))
}

/// Logs stream entries that point at no catalog entry. They are still
/// served; this is diagnostics only.
pub fn report_dangling_streams(store: &CatalogStore) -> usize {
    let dangling = store.dangling_stream_ids();
    for entry in &dangling {
        warn!(
            content_type = %entry.content_type,
            id = %entry.id,
            "stream entry has no matching catalog item"
        );
    }
    dangling.len()
}
