use serde_json::{Map, Value};

use crate::content_type::ContentType;

/// Wire names of the optional descriptive fields a meta may carry.
///
/// [`MetaExtras`] holds exactly these fields; anything else on a stored record
/// is dropped when the record is loaded.
pub const OPTIONAL_META_FIELDS: [&str; 19] = [
    "posterShape",
    "background",
    "logo",
    "videos",
    "description",
    "releaseInfo",
    "imdbRating",
    "director",
    "cast",
    "dvdRelease",
    "released",
    "inTheaters",
    "certification",
    "runtime",
    "language",
    "country",
    "awards",
    "website",
    "isPeered",
];

/// One stored movie or series, as held by the catalog.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub genres: Vec<String>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extras: MetaExtras,
}

impl CatalogItem {
    /// Episodes owned by this item; empty for movies.
    pub fn videos(&self) -> &[Video] {
        self.extras.videos.as_deref().unwrap_or_default()
    }
}

/// Compact catalog entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetaPreview {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub content_type: ContentType,
    pub name: String,
    pub genres: Vec<String>,
    pub poster: String,
}

/// Full meta: the preview fields followed by whichever optional fields the
/// stored record carries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetaDetail {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub preview: MetaPreview,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extras: MetaExtras,
}

/// Sparse optional descriptive fields. Absent values are omitted on the wire;
/// no defaults are ever synthesized.
///
/// Values are carried as stored, whatever their JSON type: add-ons publish
/// `imdbRating` as a number or a string, `runtime` as text or minutes, and so
/// on. Only `videos` is typed, since stream ids resolve against its entries.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MetaExtras {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub poster_shape: Option<Value>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub background: Option<Value>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub logo: Option<Value>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub videos: Option<Vec<Video>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub description: Option<Value>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub release_info: Option<Value>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub imdb_rating: Option<Value>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub director: Option<Value>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub cast: Option<Value>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub dvd_release: Option<Value>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub released: Option<Value>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub in_theaters: Option<Value>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub certification: Option<Value>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub runtime: Option<Value>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub language: Option<Value>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub country: Option<Value>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub awards: Option<Value>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub website: Option<Value>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub is_peered: Option<Value>,
}

/// Episode of a series. `id` is `<seriesId>:<season>:<episode>`; season,
/// episode, title and release date are kept as stored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Video {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub details: Map<String, Value>,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_extras_are_omitted() {
        let detail = MetaDetail {
            preview: MetaPreview {
                id: "tt1".into(),
                content_type: ContentType::movie(),
                name: "One".into(),
                genres: vec!["Drama".into()],
                poster: "https://example.test/tt1".into(),
            },
            extras: MetaExtras {
                imdb_rating: Some(json!(6.9)),
                ..MetaExtras::default()
            },
        };

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "tt1",
                "type": "movie",
                "name": "One",
                "genres": ["Drama"],
                "poster": "https://example.test/tt1",
                "imdbRating": 6.9
            })
        );
    }

    #[test]
    fn unknown_fields_on_stored_items_are_dropped() {
        let item: CatalogItem = serde_json::from_value(json!({
            "id": "tt2",
            "name": "Two",
            "genres": [],
            "logo": "https://example.test/logo.png",
            "trailer": "not part of the whitelist"
        }))
        .unwrap();

        assert_eq!(item.extras.logo, Some(json!("https://example.test/logo.png")));
        let Value::Object(extras) = serde_json::to_value(&item.extras).unwrap() else {
            panic!("extras serialize as an object");
        };
        assert_eq!(extras.keys().collect::<Vec<_>>(), vec!["logo"]);
    }

    #[test]
    fn whitelisted_fields_keep_their_stored_json_type() {
        let stored = json!({
            "id": "tt3",
            "name": "Three",
            "genres": ["Drama"],
            "imdbRating": "7.1",
            "runtime": 120,
            "released": "2010-06-16T00:00:00.000Z",
            "director": "A. Director",
            "inTheaters": "no"
        });

        let item: CatalogItem = serde_json::from_value(stored.clone()).unwrap();
        assert_eq!(item.extras.imdb_rating, Some(json!("7.1")));
        assert_eq!(item.extras.runtime, Some(json!(120)));
        assert_eq!(serde_json::to_value(&item).unwrap(), stored);
    }

    #[test]
    fn every_extras_field_is_on_the_whitelist() {
        let full = MetaExtras {
            poster_shape: Some(json!("poster")),
            background: Some(json!("bg")),
            logo: Some(json!("logo")),
            videos: Some(Vec::new()),
            description: Some(json!("d")),
            release_info: Some(json!("2001")),
            imdb_rating: Some(json!(7.0)),
            director: Some(json!(["A"])),
            cast: Some(json!(["B"])),
            dvd_release: Some(json!("2002-01-01")),
            released: Some(json!("2001-01-01")),
            in_theaters: Some(json!(false)),
            certification: Some(json!("PG")),
            runtime: Some(json!("90 min")),
            language: Some(json!("en")),
            country: Some(json!("US")),
            awards: Some(json!("none")),
            website: Some(json!("https://example.test")),
            is_peered: Some(json!(true)),
        };

        let Value::Object(map) = serde_json::to_value(&full).unwrap() else {
            panic!("extras serialize as an object");
        };
        let mut keys: Vec<_> = map.keys().map(String::as_str).collect();
        let mut expected = OPTIONAL_META_FIELDS.to_vec();
        keys.sort_unstable();
        expected.sort_unstable();
        assert_eq!(keys, expected);
    }

    #[test]
    fn videos_keep_every_stored_field() {
        let stored = json!({
            "season": 1,
            "episode": 2,
            "id": "hrb1:1:2",
            "title": "Second",
            "released": "1955-12-25T00:00:00.000Z",
            "thumbnail": "https://example.test/2.jpg"
        });

        let video: Video = serde_json::from_value(stored.clone()).unwrap();
        assert_eq!(video.id, "hrb1:1:2");
        assert_eq!(video.details["season"], json!(1));
        assert_eq!(serde_json::to_value(&video).unwrap(), stored);
    }
}
