use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::constants::FLAT_BUCKET_KEY;
use crate::models::RecipeLine;

/// A named group of recipe lines ("Sauce", "Protein", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub name: String,
    pub lines: Vec<RecipeLine>,
}

/// The two shapes a recipe can take.
///
/// `Structured` always holds at least one component; a menu item without
/// components is represented as `Flat`, possibly with zero lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum RecipeBody {
    Flat(Vec<RecipeLine>),
    Structured(Vec<Component>),
}

/// Identifies a scalable group of lines: a component, or the whole flat recipe.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketKey {
    Component(String),
    Lines,
}

impl BucketKey {
    /// Parse a key as typed by a user or stored by a UI layer.
    pub fn parse(raw: &str) -> Self {
        if raw == FLAT_BUCKET_KEY {
            BucketKey::Lines
        } else {
            BucketKey::Component(raw.to_string())
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketKey::Component(id) => f.write_str(id),
            BucketKey::Lines => f.write_str(FLAT_BUCKET_KEY),
        }
    }
}

/// The engine's working unit, derived from a menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub menu_price: Option<f64>,
    pub body: RecipeBody,
}

impl Recipe {
    /// Menu price as a plain number; missing prices read as 0.0.
    #[inline]
    pub fn price_or_zero(&self) -> f64 {
        self.menu_price.unwrap_or(0.0)
    }

    /// Iterate every line with the bucket it belongs to.
    pub fn lines(&self) -> Box<dyn Iterator<Item = (BucketKey, &RecipeLine)> + '_> {
        match &self.body {
            RecipeBody::Flat(lines) => Box::new(lines.iter().map(|l| (BucketKey::Lines, l))),
            RecipeBody::Structured(components) => Box::new(components.iter().flat_map(|c| {
                c.lines
                    .iter()
                    .map(move |l| (BucketKey::Component(c.id.clone()), l))
            })),
        }
    }

    /// Number of ingredient lines across all buckets.
    pub fn line_count(&self) -> usize {
        match &self.body {
            RecipeBody::Flat(lines) => lines.len(),
            RecipeBody::Structured(components) => components.iter().map(|c| c.lines.len()).sum(),
        }
    }

    /// Keys of the scalable buckets, in recipe order.
    pub fn bucket_keys(&self) -> Vec<BucketKey> {
        match &self.body {
            RecipeBody::Flat(_) => vec![BucketKey::Lines],
            RecipeBody::Structured(components) => components
                .iter()
                .map(|c| BucketKey::Component(c.id.clone()))
                .collect(),
        }
    }

    /// Display name of a bucket.
    pub fn bucket_name(&self, key: &BucketKey) -> Option<&str> {
        match (&self.body, key) {
            (RecipeBody::Flat(_), BucketKey::Lines) => Some(self.name.as_str()),
            (RecipeBody::Structured(components), BucketKey::Component(id)) => components
                .iter()
                .find(|c| &c.id == id)
                .map(|c| c.name.as_str()),
            _ => None,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self.body, RecipeBody::Structured(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostBasis, Ingredient};

    fn line(id: &str) -> RecipeLine {
        RecipeLine {
            ingredient: Ingredient {
                id: id.to_string(),
                name: id.to_uppercase(),
                unit: "kg".to_string(),
                unit_price: Some(1.0),
                last_ordered_at: None,
            },
            quantity: 1.0,
            unit: "kg".to_string(),
            cost: 1.0,
            basis: CostBasis::Converted,
        }
    }

    #[test]
    fn test_bucket_key_parse() {
        assert_eq!(BucketKey::parse("lines"), BucketKey::Lines);
        assert_eq!(
            BucketKey::parse("c-1"),
            BucketKey::Component("c-1".to_string())
        );
        assert_eq!(BucketKey::Lines.to_string(), "lines");
    }

    #[test]
    fn test_structured_lines_and_buckets() {
        let recipe = Recipe {
            id: "m1".to_string(),
            name: "Burger".to_string(),
            menu_price: Some(12.0),
            body: RecipeBody::Structured(vec![
                Component {
                    id: "c1".to_string(),
                    name: "Patty".to_string(),
                    lines: vec![line("beef"), line("salt")],
                },
                Component {
                    id: "c2".to_string(),
                    name: "Bun".to_string(),
                    lines: vec![line("flour")],
                },
            ]),
        };

        assert_eq!(recipe.line_count(), 3);
        assert_eq!(recipe.bucket_keys().len(), 2);
        assert_eq!(
            recipe.bucket_name(&BucketKey::Component("c2".to_string())),
            Some("Bun")
        );
        assert_eq!(recipe.bucket_name(&BucketKey::Lines), None);

        let keys: Vec<BucketKey> = recipe.lines().map(|(k, _)| k).collect();
        assert_eq!(keys[0], BucketKey::Component("c1".to_string()));
        assert_eq!(keys[2], BucketKey::Component("c2".to_string()));
    }

    #[test]
    fn test_flat_buckets() {
        let recipe = Recipe {
            id: "m2".to_string(),
            name: "Salad".to_string(),
            menu_price: None,
            body: RecipeBody::Flat(vec![line("lettuce")]),
        };
        assert_eq!(recipe.bucket_keys(), vec![BucketKey::Lines]);
        assert_eq!(recipe.bucket_name(&BucketKey::Lines), Some("Salad"));
        assert_eq!(recipe.price_or_zero(), 0.0);
    }
}
