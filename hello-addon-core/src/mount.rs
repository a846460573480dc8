//! Resource mounts.

use std::fmt::{self, Display, Formatter};

/// Resource families the add-on serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// `/` and `/manifest.json`
    Manifest,
    /// `/catalog/<type>/<id>.json`
    Catalog,
    /// `/meta/<type>/<id>.json`
    Meta,
    /// `/stream/<type>/<id>.json`
    Stream,
}

impl Resource {
    /// Every resource, in mount lookup order.
    pub const ALL: [Resource; 4] = [
        Resource::Manifest,
        Resource::Catalog,
        Resource::Meta,
        Resource::Stream,
    ];

    /// Leading path segment the resource is mounted under.
    pub fn mount_segment(self) -> &'static str {
        match self {
            Resource::Manifest => "manifest.json",
            Resource::Catalog => "catalog",
            Resource::Meta => "meta",
            Resource::Stream => "stream",
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Manifest => write!(f, "manifest"),
            Resource::Catalog => write!(f, "catalog"),
            Resource::Meta => write!(f, "meta"),
            Resource::Stream => write!(f, "stream"),
        }
    }
}

/// A request path resolved against the resource mounts.
///
/// `path` is what remains after the mount segment, so `/catalog/movie/x.json`
/// becomes `Catalog` + `/movie/x.json`. The bare root is the manifest with an
/// empty remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mount<'a> {
    /// Resource whose mount matched.
    pub resource: Resource,
    /// Path below the mount, leading `/` included.
    pub path: &'a str,
}

impl<'a> Mount<'a> {
    /// Returns `None` when the first segment names no known resource.
    pub fn resolve(path: &'a str) -> Option<Self> {
        let trimmed = path.trim_start_matches('/');
        if trimmed.is_empty() {
            return Some(Mount {
                resource: Resource::Manifest,
                path: "",
            });
        }

        let (head, rest) = match trimmed.find('/') {
            Some(split) => trimmed.split_at(split),
            None => (trimmed, ""),
        };

        Resource::ALL
            .into_iter()
            .find(|resource| resource.mount_segment() == head)
            .map(|resource| Mount {
                resource,
                path: rest,
            })
    }
}
