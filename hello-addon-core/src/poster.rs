//! Poster URL templates.

use std::fmt::{self, Display, Formatter};

use crate::error::{Result, StoreError};

const PLACEHOLDER: &str = "%s";

/// Poster image URL with a single `%s` placeholder for the item id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterTemplate(String);

impl PosterTemplate {
    /// Default poster service.
    pub const METAHUB: &'static str =
        "https://images.metahub.space/poster/medium/%s/img";

    /// Validates that `template` holds exactly one `%s`.
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        match template.matches(PLACEHOLDER).count() {
            1 => Ok(Self(template)),
            0 => Err(StoreError::InvalidPosterTemplate {
                template,
                reason: "missing %s placeholder",
            }),
            _ => Err(StoreError::InvalidPosterTemplate {
                template,
                reason: "more than one %s placeholder",
            }),
        }
    }

    /// Substitutes `id` for the placeholder.
    pub fn url_for(&self, id: &str) -> String {
        self.0.replacen(PLACEHOLDER, id, 1)
    }

    /// The raw template.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PosterTemplate {
    fn default() -> Self {
        Self(Self::METAHUB.to_string())
    }
}

impl Display for PosterTemplate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
