//! Transport-neutral responses and their wire headers.

use hello_addon_model::{CatalogResponse, Manifest, MetaResponse, StreamsResponse};

/// Media type of every resource body.
pub const CONTENT_TYPE_JSON: &str = "application/json";
/// Media type of the 404 body.
pub const CONTENT_TYPE_TEXT: &str = "text/plain";
/// Body of the terminal 404.
pub const NOT_FOUND_BODY: &str = "404 Not Found";

/// Headers attached to every JSON resource response.
pub const JSON_HEADERS: [(&str, &str); 3] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-headers", "*"),
    ("content-type", CONTENT_TYPE_JSON),
];

/// Headers of the terminal 404; no cross-origin headers.
pub const NOT_FOUND_HEADERS: [(&str, &str); 1] = [("content-type", CONTENT_TYPE_TEXT)];

/// Transport-neutral outcome of dispatching one request.
#[derive(Debug, Clone, PartialEq)]
pub struct AddonResponse {
    /// What was resolved; status and headers follow from it.
    pub body: AddonBody,
}

/// Payload of a response, one variant per resource plus the fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum AddonBody {
    /// The add-on manifest.
    Manifest(Manifest),
    /// `{"metas": [...]}`
    Catalog(CatalogResponse),
    /// `{"meta": ...}`, possibly `null`.
    Meta(MetaResponse),
    /// `{"streams": [...]}`
    Streams(StreamsResponse),
    /// Nothing claimed the request.
    NotFound,
}

impl AddonResponse {
    /// Wraps a resolved body.
    pub fn new(body: AddonBody) -> Self {
        Self { body }
    }

    /// The plain-text 404.
    pub fn not_found() -> Self {
        Self::new(AddonBody::NotFound)
    }

    /// 200 for every routed resource, including empty payloads; 404 only
    /// when nothing claimed the request.
    pub fn status(&self) -> u16 {
        match self.body {
            AddonBody::NotFound => 404,
            _ => 200,
        }
    }

    /// Whether this is the fallback 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self.body, AddonBody::NotFound)
    }

    /// Response headers as `(name, value)` pairs.
    pub fn headers(&self) -> &'static [(&'static str, &'static str)] {
        match self.body {
            AddonBody::NotFound => &NOT_FOUND_HEADERS,
            _ => &JSON_HEADERS,
        }
    }

    /// Serializes the body in its wire form.
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        match &self.body {
            AddonBody::Manifest(manifest) => serde_json::to_vec(manifest),
            AddonBody::Catalog(catalog) => serde_json::to_vec(catalog),
            AddonBody::Meta(meta) => serde_json::to_vec(meta),
            AddonBody::Streams(streams) => serde_json::to_vec(streams),
            AddonBody::NotFound => Ok(NOT_FOUND_BODY.as_bytes().to_vec()),
        }
    }
}
