//! Dessert detail records and the ingredient slot merge.
//!
//! The lookup endpoint flattens a recipe's ingredients into up to twenty
//! parallel `strIngredientN` / `strMeasureN` fields. Decoding reads the record
//! as a plain JSON object and folds those pairs into [`Ingredient`] values.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use thiserror::Error;

const ID_FIELD: &str = "idMeal";
const NAME_FIELD: &str = "strMeal";
const INSTRUCTIONS_FIELD: &str = "strInstructions";
const THUMBNAIL_FIELD: &str = "strMealThumb";

const INGREDIENT_PREFIX: &str = "strIngredient";
const MEASURE_PREFIX: &str = "strMeasure";

/// Errors raised while decoding a detail record.
///
/// Only the top-level fields can fail; a broken ingredient slot is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Detail record must be a JSON object")]
    NotAnObject,

    #[error("Missing field '{0}'")]
    MissingField(&'static str),

    #[error("Field '{0}' must be a string")]
    NotAString(&'static str),
}

/// One ingredient line of a recipe.
///
/// `id` is the slot numeral the pair was read from. It is unique within one
/// detail but not across details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub measurement: String,
}

impl Ingredient {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        measurement: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            measurement: measurement.into(),
        }
    }
}

/// Full recipe for a single dessert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DessertDetail {
    pub id: String,
    pub name: String,
    pub instructions: String,
    pub thumbnail_url: String,
    pub ingredients: Vec<Ingredient>,
}

impl DessertDetail {
    /// Decode a detail from any JSON value, rejecting non-objects.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        value
            .as_object()
            .ok_or(DecodeError::NotAnObject)
            .and_then(Self::from_record)
    }

    /// Decode a detail from one element of the lookup response.
    pub fn from_record(record: &Map<String, Value>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: required_str(record, ID_FIELD)?,
            name: required_str(record, NAME_FIELD)?,
            instructions: required_str(record, INSTRUCTIONS_FIELD)?,
            thumbnail_url: required_str(record, THUMBNAIL_FIELD)?,
            ingredients: merge_ingredients(record),
        })
    }
}

impl<'de> Deserialize<'de> for DessertDetail {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_record(&record).map_err(D::Error::custom)
    }
}

fn required_str(record: &Map<String, Value>, field: &'static str) -> Result<String, DecodeError> {
    match record.get(field) {
        None | Some(Value::Null) => Err(DecodeError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(DecodeError::NotAString(field)),
    }
}

/// Fold the parallel ingredient/measure slots of a record into ingredients.
///
/// A slot is kept only when both halves are strings that are non-empty after
/// trimming. The result is ordered by slot numeral compared as text.
pub(crate) fn merge_ingredients(record: &Map<String, Value>) -> Vec<Ingredient> {
    let mut ingredients: Vec<Ingredient> = record
        .iter()
        .filter_map(|(key, value)| {
            let slot = key.strip_prefix(INGREDIENT_PREFIX)?;
            if slot.is_empty() || !slot.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let name = non_blank(value)?;
            let measurement = non_blank(record.get(&format!("{MEASURE_PREFIX}{slot}"))?)?;
            Some(Ingredient {
                id: slot.to_string(),
                name,
                measurement,
            })
        })
        .collect();

    // Text comparison: slot "10" sorts before slot "2".
    ingredients.sort_by(|a, b| a.id.cmp(&b.id));
    ingredients
}

fn non_blank(value: &Value) -> Option<String> {
    let trimmed = value.as_str()?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
