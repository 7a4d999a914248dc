//! Raw catalog records and the preprocess stage.
//!
//! This module defines the serde-facing [`RawResource`] shape with permissive
//! defaults for every field the catalog data may omit or malform, and its
//! conversion into the domain [`Resource`]. Malformed records are never
//! fatal; they degrade to documented defaults.

use crate::domain::{Resource, ResourceKind};
use serde::{Deserialize, Deserializer};

/// Category key assigned to records whose category field is absent or empty.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// One catalog entry as it appears in the raw JSON data.
///
/// Every field is optional at the wire level. The preprocess stage
/// ([`RawResource::into_resource`]) applies the permissive defaults:
///
/// - missing or empty `category` becomes the literal key `"unknown"`
/// - missing or empty `category_name` falls back to the category key
/// - missing or unrecognized `resource_type` becomes `database`
/// - numeric `id` values are rendered as strings
#[derive(Debug, Clone, Deserialize)]
pub struct RawResource {
    #[serde(default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub resource_type: ResourceKind,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub short_description_zh: Option<String>,
    #[serde(default)]
    pub url: String,
}

/// Accepts catalog ids as either JSON strings or numbers.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Text(String),
        Number(i64),
    }

    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(text) => text,
        IdRepr::Number(number) => number.to_string(),
    })
}

impl RawResource {
    /// Normalizes this record into a domain [`Resource`].
    ///
    /// Applies the permissive defaults documented on the type and derives the
    /// lowercase search haystack. An empty second-language description is
    /// treated as absent so it never pads the haystack or the tooltip.
    #[must_use]
    pub fn into_resource(self) -> Resource {
        let category = if self.category.trim().is_empty() {
            UNKNOWN_CATEGORY.to_string()
        } else {
            self.category
        };

        let category_name = if self.category_name.trim().is_empty() {
            category.clone()
        } else {
            self.category_name
        };

        let description_zh = self
            .short_description_zh
            .filter(|text| !text.trim().is_empty());

        Resource::new(
            self.id,
            self.name,
            category,
            category_name,
            self.resource_type,
            self.short_description,
            description_zh,
            self.url,
        )
    }
}
