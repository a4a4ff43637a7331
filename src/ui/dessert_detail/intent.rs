use crate::model::DessertDetail;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DessertDetailIntent {
    LoadStarted,
    Loaded { detail: DessertDetail },
    /// The API returned no meal for the requested id.
    NotFound,
    LoadFailed { message: String },
}

impl Intent for DessertDetailIntent {}
