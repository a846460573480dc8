use crate::content_type::ContentType;

/// Static descriptor of the add-on: identity plus what it can serve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Manifest {
    pub id: String,
    pub version: String,
    pub name: String,
    pub description: String,
    pub types: Vec<ContentType>,
    pub catalogs: Vec<CatalogDeclaration>,
    pub resources: Vec<ResourceDeclaration>,
}

/// A listable catalog advertised by the manifest.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogDeclaration {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub content_type: ContentType,
    pub id: String,
}

/// A served resource: either a bare name, or a name restricted to a subset of
/// content types and id prefixes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ResourceDeclaration {
    Short(String),
    Detailed(ResourceDescriptor),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ResourceDescriptor {
    pub name: String,
    pub types: Vec<ContentType>,
    pub id_prefixes: Vec<String>,
}
