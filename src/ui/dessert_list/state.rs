use crate::model::{DessertSummary, LoadStatus, SortOrder};
use crate::ui::mvi::UiState;

/// Everything the dessert list screen renders.
///
/// `filtered_desserts` is always `project(all_desserts, applied_search_text,
/// sort_order)`. `search_text` runs ahead of `applied_search_text` while the
/// debounce is pending.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DessertListState {
    pub all_desserts: Vec<DessertSummary>,
    pub filtered_desserts: Vec<DessertSummary>,
    /// Text currently in the search field.
    pub search_text: String,
    /// Search text the displayed list was last projected with.
    pub applied_search_text: String,
    pub sort_order: SortOrder,
    pub status: LoadStatus,
    /// Message of the last failed load, cleared by the next successful one.
    pub last_error: Option<String>,
}

impl UiState for DessertListState {}

impl DessertListState {
    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    /// True while typed search text has not reached the displayed list yet.
    pub fn search_pending(&self) -> bool {
        self.search_text != self.applied_search_text
    }

    pub fn filtered_names(&self) -> Vec<&str> {
        self.filtered_desserts.iter().map(|d| d.name.as_str()).collect()
    }
}
