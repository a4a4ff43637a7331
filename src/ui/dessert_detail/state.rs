use crate::model::{Ingredient, LoadStatus};
use crate::ui::mvi::UiState;

/// Everything the dessert detail screen renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DessertDetailState {
    pub meal_name: String,
    pub thumbnail_url: String,
    pub instructions: String,
    pub ingredients: Vec<Ingredient>,
    pub status: LoadStatus,
    pub last_error: Option<String>,
}

impl UiState for DessertDetailState {}

impl DessertDetailState {
    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    /// True when none of the display fields hold anything.
    pub fn is_blank(&self) -> bool {
        self.meal_name.is_empty()
            && self.thumbnail_url.is_empty()
            && self.instructions.is_empty()
            && self.ingredients.is_empty()
    }
}
