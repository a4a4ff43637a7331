mod intent;
mod projection;
mod reducer;
mod state;
mod view_model;

pub use intent::DessertListIntent;
pub use projection::{matches_search, project};
pub use reducer::DessertListReducer;
pub use state::DessertListState;
pub use view_model::{DessertListViewModel, SEARCH_DEBOUNCE};
