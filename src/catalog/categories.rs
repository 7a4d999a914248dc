//! Per-category summary for the host's filter controls.

use crate::domain::Resource;
use std::collections::HashMap;

/// Sentinel category key matching every resource.
pub const ALL_CATEGORY: &str = "all";

/// One entry in the category filter list: machine key, human label, and the
/// number of resources carrying that key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub key: String,
    pub label: String,
    pub count: usize,
}

/// Computes the category filter entries for the full collection.
///
/// The first entry is always the `"all"` sentinel carrying the total count;
/// the remaining entries appear in first-seen order, each labeled with the
/// first non-empty `category_name` encountered for that key. Computed over
/// the full collection, never the filtered view, so counts stay stable while
/// the user filters.
#[must_use]
pub fn summarize_categories(resources: &[Resource]) -> Vec<CategorySummary> {
    let mut summaries = vec![CategorySummary {
        key: ALL_CATEGORY.to_string(),
        label: ALL_CATEGORY.to_string(),
        count: resources.len(),
    }];
    let mut index: HashMap<String, usize> = HashMap::new();

    for resource in resources {
        if let Some(&position) = index.get(&resource.category) {
            summaries[position].count += 1;
        } else {
            index.insert(resource.category.clone(), summaries.len());
            summaries.push(CategorySummary {
                key: resource.category.clone(),
                label: resource.category_name.clone(),
                count: 1,
            });
        }
    }

    summaries
}
