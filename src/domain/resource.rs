//! Resource record model.
//!
//! This module defines the core `Resource` type representing one catalogued
//! bioinformatics resource (a database or a web tool) together with its
//! precomputed search haystack. Resources are produced by the catalog
//! preprocess stage and treated as read-only afterwards.

use serde::{Deserialize, Deserializer, Serialize};

/// Kind of catalogued resource, determining the icon and access label shown
/// by the host. Carries no other semantics.
///
/// Unrecognized or absent kinds degrade to [`ResourceKind::Database`], the
/// permissive default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// A browsable web tool or portal.
    Web,

    /// A queryable database. Also the catch-all for unknown kind strings.
    Database,
}

impl Default for ResourceKind {
    fn default() -> Self {
        Self::Database
    }
}

impl<'de> Deserialize<'de> for ResourceKind {
    /// Deserializes from the catalog's kind strings.
    ///
    /// Only `"web"` maps to [`ResourceKind::Web`]; every other string is
    /// treated as a database so malformed catalog rows are never fatal.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_key(&raw))
    }
}

impl ResourceKind {
    /// Parses a kind from its machine key, degrading unknown keys to
    /// [`ResourceKind::Database`].
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "web" => Self::Web,
            _ => Self::Database,
        }
    }

    /// Returns the machine key for this kind.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Web => "web",
        }
    }

    /// Returns the icon class the host should render for this kind.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Database => "fas fa-database",
            Self::Web => "fas fa-globe-americas",
        }
    }

    /// Returns the access-button label for this kind.
    #[must_use]
    pub const fn access_label(self) -> &'static str {
        match self {
            Self::Database => "访问数据库",
            Self::Web => "访问网站",
        }
    }
}

/// One catalogued bioinformatics resource.
///
/// A resource is a catalog entry with descriptive metadata and a destination
/// URL that is opened externally and never dereferenced by the engine.
///
/// # Fields
///
/// - `id`: stable unique identifier
/// - `category` / `category_name`: machine key and human label for grouping
/// - `kind`: resource kind (database or web tool)
/// - `short_description` / `short_description_zh`: two-language descriptions
/// - `haystack`: derived search text, see below
///
/// # Haystack invariant
///
/// `haystack` is the lowercase concatenation of `name` and both descriptions,
/// computed once when the record is built from raw catalog data. It must be
/// recomputed if any of those source fields changes. The engine never mutates
/// resource fields post-load, so in practice the haystack is computed exactly
/// once, but any code that edits a resource must rebuild it via
/// [`Resource::build_haystack`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub category: String,
    pub category_name: String,
    pub kind: ResourceKind,
    pub short_description: String,
    pub short_description_zh: Option<String>,
    pub url: String,
    pub haystack: String,
}

impl Resource {
    /// Creates a resource, deriving the search haystack from the descriptive
    /// fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use bionav::domain::{Resource, ResourceKind};
    ///
    /// let resource = Resource::new(
    ///     "1".to_string(),
    ///     "UniProt".to_string(),
    ///     "protein".to_string(),
    ///     "Protein".to_string(),
    ///     ResourceKind::Database,
    ///     "Protein sequence knowledgebase".to_string(),
    ///     None,
    ///     "https://www.uniprot.org".to_string(),
    /// );
    /// assert!(resource.haystack.contains("uniprot"));
    /// ```
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        name: String,
        category: String,
        category_name: String,
        kind: ResourceKind,
        short_description: String,
        short_description_zh: Option<String>,
        url: String,
    ) -> Self {
        let haystack = Self::build_haystack(
            &name,
            &short_description,
            short_description_zh.as_deref(),
        );
        Self {
            id,
            name,
            category,
            category_name,
            kind,
            short_description,
            short_description_zh,
            url,
            haystack,
        }
    }

    /// Builds the lowercase search haystack from the source fields.
    ///
    /// The haystack is `name`, the primary description, and the optional
    /// second-language description joined by single spaces, lowercased so the
    /// text predicate can match case-insensitively with a plain substring
    /// check.
    #[must_use]
    pub fn build_haystack(name: &str, description: &str, description_zh: Option<&str>) -> String {
        format!(
            "{} {} {}",
            name,
            description,
            description_zh.unwrap_or_default()
        )
        .to_lowercase()
    }
}
