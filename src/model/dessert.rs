use serde::Deserialize;

/// A row in the dessert list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DessertSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail_url: String,
}

impl DessertSummary {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumbnail_url: thumbnail_url.into(),
        }
    }
}
