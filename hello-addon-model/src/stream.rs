/// A playable source for an item or episode.
///
/// On the wire the title sits beside exactly one source field:
/// `{title, infoHash, fileIdx?}`, `{title, url}`, `{title, ytId}` or
/// `{title, externalUrl}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stream {
    pub title: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub source: StreamSource,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum StreamSource {
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Torrent {
        info_hash: String,
        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        file_idx: Option<u32>,
    },
    Url {
        url: String,
    },
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    YouTube {
        yt_id: String,
    },
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    External {
        external_url: String,
    },
}

impl StreamSource {
    /// Short label for the source variant, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            StreamSource::Torrent { .. } => "torrent",
            StreamSource::Url { .. } => "url",
            StreamSource::YouTube { .. } => "youtube",
            StreamSource::External { .. } => "external",
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn torrent_without_file_index_omits_it() {
        let stream = Stream {
            title: "Torrent".into(),
            source: StreamSource::Torrent {
                info_hash: "abc".into(),
                file_idx: None,
            },
        };
        assert_eq!(
            serde_json::to_value(&stream).unwrap(),
            json!({ "title": "Torrent", "infoHash": "abc" })
        );
    }

    #[test]
    fn variants_are_recognized_by_their_source_field() {
        let parsed: Vec<Stream> = serde_json::from_value(json!([
            { "title": "Torrent", "infoHash": "abc", "fileIdx": 1 },
            { "title": "HTTP URL", "url": "http://example.test/a.mp4" },
            { "title": "YouTube", "ytId": "xyz" },
            { "title": "External URL", "externalUrl": "https://example.test/watch" }
        ]))
        .unwrap();

        let kinds: Vec<_> = parsed.iter().map(|s| s.source.kind()).collect();
        assert_eq!(kinds, ["torrent", "url", "youtube", "external"]);
        assert_eq!(
            parsed[0].source,
            StreamSource::Torrent {
                info_hash: "abc".into(),
                file_idx: Some(1)
            }
        );
    }
}
