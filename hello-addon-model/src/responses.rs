//! Response envelopes, one per resource.

use crate::meta::{MetaDetail, MetaPreview};
use crate::stream::Stream;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogResponse {
    pub metas: Vec<MetaPreview>,
}

/// `meta` is `null` when the requested id is not in the catalog.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetaResponse {
    pub meta: Option<MetaDetail>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamsResponse {
    pub streams: Vec<Stream>,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn missing_meta_is_null_not_absent() {
        let body = serde_json::to_string(&MetaResponse { meta: None }).unwrap();
        assert_eq!(body, r#"{"meta":null}"#);
    }

    #[test]
    fn empty_streams_stay_a_list() {
        let body = serde_json::to_string(&StreamsResponse { streams: vec![] }).unwrap();
        assert_eq!(body, r#"{"streams":[]}"#);
    }
}
