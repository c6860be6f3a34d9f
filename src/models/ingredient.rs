use serde::{Deserialize, Serialize};

/// An ingredient as priced by the store.
///
/// `unit_price` of `None`, zero, negative or non-finite means "unpriced".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,

    /// Unit the price refers to ("lb", "L", "each", ...).
    pub unit: String,

    pub unit_price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_ordered_at: Option<String>,
}

impl Ingredient {
    /// True when the ingredient carries a positive, finite price.
    #[inline]
    pub fn has_price(&self) -> bool {
        matches!(self.unit_price, Some(p) if p.is_finite() && p > 0.0)
    }

    /// Price usable for costing, or 0.0 when unpriced.
    #[inline]
    pub fn usable_price(&self) -> f64 {
        if self.has_price() {
            self.unit_price.unwrap_or(0.0)
        } else {
            0.0
        }
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        match self.unit_price {
            Some(price) => format!("{} ({}): {}/{}", self.name, self.id, price, self.unit),
            None => format!("{} ({}): unpriced/{}", self.name, self.id, self.unit),
        }
    }
}

/// How a line's cost was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostBasis {
    /// Cost came from the unit converter.
    Converted,
    /// Converter failed; cost is `quantity * unit_price`.
    NaiveFallback,
    /// Ingredient has no usable price; cost is 0.
    Unpriced,
}

/// How much of an ingredient a recipe calls for, with its materialized cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeLine {
    pub ingredient: Ingredient,
    pub quantity: f64,

    /// Unit the recipe quantity is expressed in. May differ from the priced unit.
    pub unit: String,

    pub cost: f64,
    pub basis: CostBasis,
}

impl RecipeLine {
    #[inline]
    pub fn has_price(&self) -> bool {
        self.ingredient.has_price()
    }
}
