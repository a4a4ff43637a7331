use crate::model::LoadStatus;
use crate::ui::mvi::Reducer;

use super::intent::DessertListIntent;
use super::projection::project;
use super::state::DessertListState;

pub struct DessertListReducer;

impl Reducer for DessertListReducer {
    type State = DessertListState;
    type Intent = DessertListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DessertListIntent::LoadStarted => DessertListState {
                status: LoadStatus::Loading,
                ..state
            },

            DessertListIntent::LoadSucceeded { desserts } => {
                // The load path projects with the live search text, bypassing the debounce.
                let filtered_desserts = project(&desserts, &state.search_text, state.sort_order);
                DessertListState {
                    all_desserts: desserts,
                    filtered_desserts,
                    applied_search_text: state.search_text.clone(),
                    status: LoadStatus::Idle,
                    last_error: None,
                    ..state
                }
            }

            DessertListIntent::LoadFailed { message } => DessertListState {
                all_desserts: Vec::new(),
                filtered_desserts: Vec::new(),
                status: LoadStatus::Failed,
                last_error: Some(message),
                ..state
            },

            DessertListIntent::SearchTextChanged { text } => DessertListState {
                search_text: text,
                ..state
            },

            DessertListIntent::SearchSettled { text } => {
                let filtered_desserts = project(&state.all_desserts, &text, state.sort_order);
                DessertListState {
                    filtered_desserts,
                    applied_search_text: text,
                    ..state
                }
            }

            DessertListIntent::SortOrderChanged { order } => {
                let filtered_desserts =
                    project(&state.all_desserts, &state.applied_search_text, order);
                DessertListState {
                    filtered_desserts,
                    sort_order: order,
                    ..state
                }
            }
        }
    }
}
