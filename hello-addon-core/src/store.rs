//! Static catalog store.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use hello_addon_model::{CatalogItem, ContentType, Manifest, Stream};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::poster::PosterTemplate;

/// Sample data served when no catalog file is configured.
pub const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.json");

type StreamTable = HashMap<String, Vec<Stream>>;

/// On-disk shape of a catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    manifest: Manifest,
    #[serde(default)]
    catalog: HashMap<ContentType, Vec<CatalogItem>>,
    #[serde(default)]
    streams: HashMap<ContentType, StreamTable>,
}

/// Immutable manifest, catalog and stream tables.
///
/// Built once before serving; there is no mutation API, so shared references
/// can be read from any number of tasks.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    manifest: Manifest,
    catalog: HashMap<ContentType, Vec<CatalogItem>>,
    streams: HashMap<ContentType, StreamTable>,
    poster: PosterTemplate,
}

/// Stream entry whose id resolves to nothing in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DanglingStream {
    /// Stream table the entry sits in.
    pub content_type: ContentType,
    /// Item or episode id the entry is keyed by.
    pub id: String,
}

impl CatalogStore {
    /// The built-in sample add-on.
    pub fn sample() -> Result<Self> {
        Self::from_json_str(SAMPLE_CATALOG)
    }

    /// Parses a catalog document (`manifest`, `catalog`, `streams`).
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(raw)?;
        Ok(Self {
            manifest: document.manifest,
            catalog: document.catalog,
            streams: document.streams,
            poster: PosterTemplate::default(),
        })
    }

    /// Reads and parses a catalog document from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = raw.len(), "read catalog file");
        Self::from_json_str(&raw)
    }

    /// Replaces the poster URL template used for previews.
    pub fn with_poster_template(mut self, poster: PosterTemplate) -> Self {
        self.poster = poster;
        self
    }

    /// The add-on manifest, served as-is.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Poster URL for an item id.
    pub fn poster_url(&self, id: &str) -> String {
        self.poster.url_for(id)
    }

    /// Items of one type in storage order, or `None` for an unknown type.
    pub fn items(&self, content_type: &str) -> Option<&[CatalogItem]> {
        self.catalog.get(content_type).map(Vec::as_slice)
    }

    /// First item of `content_type` whose id equals `id`.
    pub fn find_item(&self, content_type: &str, id: &str) -> Option<&CatalogItem> {
        self.items(content_type)?.iter().find(|item| item.id == id)
    }

    /// Stream table of one type, or `None` for an unknown type.
    pub fn stream_table(&self, content_type: &str) -> Option<&HashMap<String, Vec<Stream>>> {
        self.streams.get(content_type)
    }

    /// Content types that have a catalog, in no particular order.
    pub fn catalog_types(&self) -> impl Iterator<Item = &ContentType> {
        self.catalog.keys()
    }

    /// Number of catalog items across all types.
    pub fn item_count(&self) -> usize {
        self.catalog.values().map(Vec::len).sum()
    }

    /// Number of stream records across all tables.
    pub fn stream_count(&self) -> usize {
        self.streams.values().flat_map(HashMap::values).map(Vec::len).sum()
    }

    /// Stream ids that match no catalog entry of the same type.
    ///
    /// Items with videos are matched by video id, items without by their own
    /// id. Dangling entries are still served; this only reports them.
    pub fn dangling_stream_ids(&self) -> Vec<DanglingStream> {
        let mut dangling: Vec<DanglingStream> = self
            .streams
            .iter()
            .flat_map(|(content_type, table)| {
                table
                    .keys()
                    .filter(|id| !self.resolves(content_type.as_str(), id))
                    .map(|id| DanglingStream {
                        content_type: content_type.clone(),
                        id: id.clone(),
                    })
            })
            .collect();
        dangling.sort();
        dangling
    }

    fn resolves(&self, content_type: &str, stream_id: &str) -> bool {
        self.items(content_type).is_some_and(|items| {
            items.iter().any(|item| {
                let videos = item.videos();
                if videos.is_empty() {
                    item.id == stream_id
                } else {
                    videos.iter().any(|video| video.id == stream_id)
                }
            })
        })
    }
}
