use crate::model::LoadStatus;
use crate::ui::mvi::Reducer;

use super::intent::DessertDetailIntent;
use super::state::DessertDetailState;

/// Message shown when the API knows no meal with the requested id.
pub const INVALID_MEAL_ID: &str = "Invalid Meal Id";

pub struct DessertDetailReducer;

impl Reducer for DessertDetailReducer {
    type State = DessertDetailState;
    type Intent = DessertDetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DessertDetailIntent::LoadStarted => DessertDetailState {
                status: LoadStatus::Loading,
                ..state
            },
            DessertDetailIntent::Loaded { detail } => DessertDetailState {
                meal_name: detail.name,
                thumbnail_url: detail.thumbnail_url,
                instructions: detail.instructions,
                ingredients: detail.ingredients,
                status: LoadStatus::Idle,
                last_error: None,
            },
            // Failures clear whatever an earlier load displayed.
            DessertDetailIntent::NotFound => failed(INVALID_MEAL_ID.to_string()),
            DessertDetailIntent::LoadFailed { message } => failed(message),
        }
    }
}

fn failed(message: String) -> DessertDetailState {
    DessertDetailState {
        status: LoadStatus::Failed,
        last_error: Some(message),
        ..DessertDetailState::default()
    }
}
