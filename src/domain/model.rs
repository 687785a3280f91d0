use serde::{Deserialize, Serialize};

/// Nutritional profile of a single fruit, as reported by the endpoint.
///
/// Values are carried over from the payload as-is; the endpoint does not
/// promise non-negative numbers and we do not reject them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub fat: f64,
    pub sugar: f64,
    pub carbohydrates: f64,
    pub protein: f64,
}

/// One fruit as delivered by the endpoint. Immutable value type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FruitRecord {
    pub name: String,
    pub id: i64,
    pub family: String,
    pub order: String,
    pub genus: String,
    pub nutritions: Nutrition,
}

/// The records of one successful fetch, in wire order.
///
/// Created empty at session start, replaced wholesale on fetch success,
/// never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FruitCatalog {
    records: Vec<FruitRecord>,
}

impl FruitCatalog {
    pub fn new(records: Vec<FruitRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[FruitRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FruitRecord> {
        self.records.iter()
    }
}

impl From<Vec<FruitRecord>> for FruitCatalog {
    fn from(records: Vec<FruitRecord>) -> Self {
        Self::new(records)
    }
}

/// Which nutrition field drives the ordering of a view. Always applied
/// descending, highest value first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Calories,
    Fat,
    Sugar,
    Carbohydrates,
    Protein,
}

impl SortKey {
    /// The value of the selected field in `nutritions`.
    pub fn value(&self, nutritions: &Nutrition) -> f64 {
        match self {
            SortKey::Calories => nutritions.calories,
            SortKey::Fat => nutritions.fat,
            SortKey::Sugar => nutritions.sugar,
            SortKey::Carbohydrates => nutritions.carbohydrates,
            SortKey::Protein => nutritions.protein,
        }
    }
}
