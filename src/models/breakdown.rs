use serde::{Deserialize, Serialize};

use crate::models::{BucketKey, CostBasis};

/// Cost rollup of one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentCost {
    pub id: String,
    pub name: String,
    pub cost: f64,

    /// Fraction of the recipe total (0.0 when the total is 0).
    pub share: f64,
}

/// Cost of one recipe line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineCost {
    pub bucket: BucketKey,
    pub ingredient_id: String,
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: String,
    pub cost: f64,
    pub basis: CostBasis,
    pub has_price: bool,
}

/// An ingredient referenced by the recipe without a usable price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingPrice {
    pub ingredient_id: String,
    pub ingredient_name: String,
}

/// Derived cost figures for one recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub total_cost: f64,

    /// Empty for flat recipes.
    pub components: Vec<ComponentCost>,

    pub lines: Vec<LineCost>,

    /// Unique by ingredient id, first-seen order.
    pub missing_price_ingredients: Vec<MissingPrice>,

    pub ingredient_count: usize,

    /// True iff there is at least one line and every line is priced.
    pub has_complete_data: bool,
}

impl CostBreakdown {
    pub fn missing_price_count(&self) -> usize {
        self.missing_price_ingredients.len()
    }

    /// Cost of a single bucket, if the bucket exists.
    pub fn bucket_cost(&self, key: &BucketKey) -> Option<f64> {
        match key {
            BucketKey::Component(id) => self
                .components
                .iter()
                .find(|c| &c.id == id)
                .map(|c| c.cost),
            BucketKey::Lines if self.components.is_empty() => Some(self.total_cost),
            BucketKey::Lines => None,
        }
    }
}
