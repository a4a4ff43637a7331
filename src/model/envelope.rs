use serde::{Deserialize, Deserializer};

/// The `{"meals": [...]}` wrapper every endpoint responds with.
///
/// The API answers unknown ids with `{"meals": null}`, so a null or absent
/// `meals` decodes as an empty list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct MealsEnvelope<T> {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub meals: Vec<T>,
}

impl<T> MealsEnvelope<T> {
    pub fn into_meals(self) -> Vec<T> {
        self.meals
    }

    pub fn into_first(self) -> Option<T> {
        self.meals.into_iter().next()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DessertSummary;

    #[test]
    fn null_meals_is_empty() {
        let envelope: MealsEnvelope<DessertSummary> =
            serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(envelope.meals.is_empty());
    }

    #[test]
    fn absent_meals_is_empty() {
        let envelope: MealsEnvelope<DessertSummary> = serde_json::from_str("{}").unwrap();
        assert!(envelope.into_first().is_none());
    }

    #[test]
    fn meals_keep_response_order() {
        let json = r#"{"meals": [
            {"idMeal": "2", "strMeal": "B", "strMealThumb": "b"},
            {"idMeal": "1", "strMeal": "A", "strMealThumb": "a"}
        ]}"#;
        let envelope: MealsEnvelope<DessertSummary> = serde_json::from_str(json).unwrap();
        let ids: Vec<_> = envelope.into_meals().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }
}
