//! Request path parsing.

use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_EXTENSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.\w+$").expect("extension pattern is a valid regex")
});

/// Request path split into protocol arguments.
///
/// Nothing is validated: missing segments stay `None` and downstream handlers
/// treat them as matching nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRequest {
    /// First segment, e.g. `movie`.
    pub content_type: Option<String>,
    /// Second segment: an item id or `<seriesId>:<season>:<episode>`.
    pub id: Option<String>,
    /// Segments after the id. Reserved for protocol extensions.
    pub extra_args: Vec<String>,
}

impl ParsedRequest {
    /// Parses a mount-relative path such as `/series/hrbtt0147753:1:1.json`.
    ///
    /// The leading separator and a trailing `.<ext>` are dropped, the rest is
    /// split on `/`, and every segment is percent-decoded.
    pub fn parse(path: &str) -> Self {
        let path = path.strip_prefix('/').unwrap_or(path);
        let path = TRAILING_EXTENSION.replace(path, "");

        let mut segments: Vec<String> = path.split('/').map(decode_segment).collect();
        // Trailing empty segments carry no arguments ("" yields none at all).
        while segments.last().is_some_and(|segment| segment.is_empty()) {
            segments.pop();
        }

        let mut segments = segments.into_iter();
        Self {
            content_type: segments.next(),
            id: segments.next(),
            extra_args: segments.collect(),
        }
    }

    /// Content type segment, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Id segment, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

fn decode_segment(segment: &str) -> String {
    let bytes = urlencoding::decode_binary(segment.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
