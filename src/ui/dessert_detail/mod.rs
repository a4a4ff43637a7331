mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::DessertDetailIntent;
pub use reducer::{DessertDetailReducer, INVALID_MEAL_ID};
pub use state::DessertDetailState;
pub use view_model::DessertDetailViewModel;
