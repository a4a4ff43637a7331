use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Fetch lifecycle of a view-model. Decides which fields are meaningful to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Failed,
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Ordering of the dessert list by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ReverseAlphabetical,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Alphabetical, SortOrder::ReverseAlphabetical];

    /// Label shown in a sort picker.
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Alphabetical => "Alphabetical",
            SortOrder::ReverseAlphabetical => "Reverse",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
#[error("Unknown sort order '{0}' (expected 'alphabetical' or 'reverse')")]
pub struct ParseSortOrderError(String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alphabetical" | "asc" => Ok(SortOrder::Alphabetical),
            "reverse" | "reversealphabetical" | "desc" => Ok(SortOrder::ReverseAlphabetical),
            other => Err(ParseSortOrderError(other.to_string())),
        }
    }
}
