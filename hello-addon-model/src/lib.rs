//! Wire data models for the hello-addon catalog protocol.
//!
//! Every JSON body the add-on emits is described here: the manifest, catalog
//! previews, detailed metas, and stream records. Serialization is behind the
//! `serde` feature so the types stay usable without it.
#![allow(missing_docs)]

pub mod content_type;
pub mod manifest;
pub mod meta;
pub mod responses;
pub mod stream;

pub use content_type::ContentType;
pub use manifest::{CatalogDeclaration, Manifest, ResourceDeclaration, ResourceDescriptor};
pub use meta::{CatalogItem, MetaDetail, MetaExtras, MetaPreview, OPTIONAL_META_FIELDS, Video};
pub use responses::{CatalogResponse, MetaResponse, StreamsResponse};
pub use stream::{Stream, StreamSource};
