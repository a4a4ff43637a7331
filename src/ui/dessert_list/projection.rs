//! Filter-then-sort transformation from the raw list to the displayed list.

use crate::model::{DessertSummary, SortOrder};

/// Project `desserts` for display.
///
/// Keeps entries whose name contains `search_text` case-insensitively (all
/// entries when the text is empty), then sorts by name in `order`.
pub fn project(
    desserts: &[DessertSummary],
    search_text: &str,
    order: SortOrder,
) -> Vec<DessertSummary> {
    let mut projected: Vec<DessertSummary> = desserts
        .iter()
        .filter(|d| matches_search(&d.name, search_text))
        .cloned()
        .collect();

    match order {
        SortOrder::Alphabetical => projected.sort_by(|a, b| a.name.cmp(&b.name)),
        SortOrder::ReverseAlphabetical => projected.sort_by(|a, b| b.name.cmp(&a.name)),
    }
    projected
}

/// Case-insensitive substring match used by [`project`].
pub fn matches_search(name: &str, search_text: &str) -> bool {
    search_text.is_empty() || name.to_lowercase().contains(&search_text.to_lowercase())
}
