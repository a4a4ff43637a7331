//! Domain model for desserts and their recipes.

mod dessert;
mod detail;
mod envelope;
mod status;

pub use dessert::DessertSummary;
pub use detail::{DecodeError, DessertDetail, Ingredient};
pub use envelope::MealsEnvelope;
pub use status::{LoadStatus, ParseSortOrderError, SortOrder};
