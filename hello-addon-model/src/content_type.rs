use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};

/// Protocol content-type token (`movie`, `series`, ...).
///
/// Kept open-ended: the protocol lets add-ons declare their own kinds, and an
/// unrecognized token must simply fail to match rather than fail to parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ContentType(String);

impl ContentType {
    pub const MOVIE: &'static str = "movie";
    pub const SERIES: &'static str = "series";

    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn movie() -> Self {
        Self::new(Self::MOVIE)
    }

    pub fn series() -> Self {
        Self::new(Self::SERIES)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ContentType {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContentType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ContentType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn lookup_by_str_matches_owned_key() {
        let mut table = HashMap::new();
        table.insert(ContentType::movie(), 6usize);

        assert_eq!(table.get("movie"), Some(&6));
        assert_eq!(table.get("book"), None);
    }

    #[test]
    fn display_is_the_raw_token() {
        assert_eq!(ContentType::series().to_string(), "series");
    }
}
