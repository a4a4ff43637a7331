use crate::model::{DessertSummary, SortOrder};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DessertListIntent {
    /// A list fetch was started (initial load or refresh).
    LoadStarted,
    LoadSucceeded { desserts: Vec<DessertSummary> },
    LoadFailed { message: String },
    /// The user edited the search field. Only stores the text; the list is
    /// re-projected once the text settles.
    SearchTextChanged { text: String },
    /// The search text has been stable for the debounce interval.
    SearchSettled { text: String },
    SortOrderChanged { order: SortOrder },
}

impl Intent for DessertListIntent {}
