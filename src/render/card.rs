//! Display projection of a resource.
//!
//! Cards are immutable view models computed from application state, in the
//! MVVM style: no business logic, only display-ready data. Everything a host
//! needs to draw one catalog entry is precomputed here so the render loop
//! does no further derivation per chunk.

use crate::domain::Resource;

/// Display information for one resource in the rendered list.
///
/// `category` and `kind_key` are machine keys the host should expose as data
/// attributes on the rendered node; external styling and accessibility layers
/// key off them. `tooltip` prefers the second-language description when the
/// record carries one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCard {
    /// Stable resource identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Machine category key (data attribute).
    pub category: String,

    /// Human category label.
    pub category_label: String,

    /// Machine kind key (data attribute).
    pub kind_key: &'static str,

    /// Icon class for the resource kind.
    pub icon: &'static str,

    /// Access-button label for the resource kind.
    pub access_label: &'static str,

    /// Primary description shown on the card.
    pub description: String,

    /// Tooltip text, preferring the second-language description.
    pub tooltip: String,

    /// Destination link, opened externally by the host.
    pub url: String,
}

impl ResourceCard {
    /// Projects a resource into its display card.
    ///
    /// Uses only the record's own fields and its precomputed derivations; in
    /// particular the search haystack is never touched during rendering.
    #[must_use]
    pub fn from_resource(resource: &Resource) -> Self {
        let tooltip = resource
            .short_description_zh
            .clone()
            .unwrap_or_else(|| resource.short_description.clone());

        Self {
            id: resource.id.clone(),
            name: resource.name.clone(),
            category: resource.category.clone(),
            category_label: resource.category_name.clone(),
            kind_key: resource.kind.key(),
            icon: resource.kind.icon(),
            access_label: resource.kind.access_label(),
            description: resource.short_description.clone(),
            tooltip,
            url: resource.url.clone(),
        }
    }
}
