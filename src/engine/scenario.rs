use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::aggregate::share_of;
use crate::engine::constants::DEFAULT_MULTIPLIER;
use crate::engine::margin::{MarginResult, PricingTiers, food_cost_percentage, pricing_tiers};
use crate::models::{BucketKey, CostBreakdown, Recipe, RecipeBody, RecipeLine};

/// User's what-if adjustments for one recipe.
///
/// Buckets without an entry scale by 1.0. Values are replaced, never mutated:
/// every reducer returns a new state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioState {
    multipliers: BTreeMap<BucketKey, f64>,
    price_override: Option<f64>,
}

impl ScenarioState {
    /// Identity scenario: every multiplier 1.0, no price override.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn multiplier(&self, key: &BucketKey) -> f64 {
        self.multipliers
            .get(key)
            .copied()
            .unwrap_or(DEFAULT_MULTIPLIER)
    }

    pub fn price_override(&self) -> Option<f64> {
        self.price_override
    }

    /// Explicitly set multipliers, in key order.
    pub fn multipliers(&self) -> impl Iterator<Item = (&BucketKey, f64)> {
        self.multipliers.iter().map(|(k, v)| (k, *v))
    }

    pub fn is_identity(&self) -> bool {
        self.price_override.is_none()
            && self.multipliers.values().all(|&m| m == DEFAULT_MULTIPLIER)
    }

    /// Set one bucket's multiplier. Invalid values become 0.0.
    #[must_use]
    pub fn apply_multiplier(&self, key: BucketKey, multiplier: f64) -> Self {
        let mut next = self.clone();
        next.multipliers.insert(key, coerce_multiplier(multiplier));
        next
    }

    /// Set or clear the hypothetical price. Invalid values clear it.
    #[must_use]
    pub fn set_price_override(&self, price: Option<f64>) -> Self {
        Self {
            multipliers: self.multipliers.clone(),
            price_override: price.and_then(coerce_price),
        }
    }

    #[must_use]
    pub fn reset(&self) -> Self {
        reset_scenario()
    }
}

/// Fresh identity scenario.
pub fn reset_scenario() -> ScenarioState {
    ScenarioState::default()
}

/// Non-finite or negative multipliers become 0.0 ("remove this component").
#[inline]
pub fn coerce_multiplier(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

fn coerce_price(value: f64) -> Option<f64> {
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Parse a multiplier as typed by a user. Empty or unparsable input is 0.0.
pub fn parse_multiplier(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .map(coerce_multiplier)
        .unwrap_or(0.0)
}

/// Parse a slider percentage ("150" → 1.5). Empty or unparsable input is 0.0.
pub fn parse_multiplier_percent(input: &str) -> f64 {
    parse_multiplier(input.trim().trim_end_matches('%')) / 100.0
}

/// Parse a price override. Empty, unparsable or negative input means no override.
pub fn parse_price_override(input: &str) -> Option<f64> {
    input
        .trim()
        .trim_start_matches('$')
        .parse::<f64>()
        .ok()
        .and_then(coerce_price)
}

/// One recipe line after scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledLine {
    pub ingredient_id: String,
    pub ingredient_name: String,
    pub unit: String,
    pub base_quantity: f64,
    pub quantity: f64,
    pub base_cost: f64,
    pub cost: f64,
}

/// One component (or the flat recipe) after scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioBucket {
    pub key: BucketKey,
    pub name: String,
    pub multiplier: f64,
    pub base_cost: f64,
    pub cost: f64,

    /// Fraction of the scenario total.
    pub share: f64,

    pub lines: Vec<ScaledLine>,
}

/// Cost and margin figures under a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioBreakdown {
    pub buckets: Vec<ScenarioBucket>,
    pub base_total_cost: f64,
    pub total_cost: f64,

    /// `total_cost - base_total_cost`.
    pub cost_delta: f64,

    /// Override if set, else the menu price.
    pub price: Option<f64>,

    pub margin: MarginResult,
    pub food_cost_percentage: Option<f64>,
    pub pricing: PricingTiers,
}

/// Recompute cost and margin under `state` without touching the inputs.
///
/// Quantities and costs scale linearly; units are left as they are.
pub fn apply_scenario(
    recipe: &Recipe,
    breakdown: &CostBreakdown,
    state: &ScenarioState,
) -> ScenarioBreakdown {
    let mut buckets = match &recipe.body {
        RecipeBody::Flat(lines) => vec![scale_bucket(
            BucketKey::Lines,
            &recipe.name,
            lines,
            state,
        )],
        RecipeBody::Structured(components) => components
            .iter()
            .map(|c| {
                scale_bucket(
                    BucketKey::Component(c.id.clone()),
                    &c.name,
                    &c.lines,
                    state,
                )
            })
            .collect(),
    };

    let total_cost: f64 = buckets.iter().map(|b| b.cost).sum();
    for bucket in &mut buckets {
        bucket.share = share_of(bucket.cost, total_cost);
    }

    let price = state.price_override().or(recipe.menu_price);
    let price_value = price.unwrap_or(0.0);

    ScenarioBreakdown {
        buckets,
        base_total_cost: breakdown.total_cost,
        total_cost,
        cost_delta: total_cost - breakdown.total_cost,
        price,
        margin: MarginResult::evaluate(price_value, total_cost),
        food_cost_percentage: food_cost_percentage(price_value, total_cost),
        pricing: pricing_tiers(total_cost),
    }
}

fn scale_bucket(
    key: BucketKey,
    name: &str,
    lines: &[RecipeLine],
    state: &ScenarioState,
) -> ScenarioBucket {
    let multiplier = state.multiplier(&key);

    let lines: Vec<ScaledLine> = lines
        .iter()
        .map(|line| ScaledLine {
            ingredient_id: line.ingredient.id.clone(),
            ingredient_name: line.ingredient.name.clone(),
            unit: line.unit.clone(),
            base_quantity: line.quantity,
            quantity: line.quantity * multiplier,
            base_cost: line.cost,
            cost: line.cost * multiplier,
        })
        .collect();

    ScenarioBucket {
        name: name.to_string(),
        multiplier,
        base_cost: lines.iter().map(|l| l.base_cost).sum(),
        cost: lines.iter().map(|l| l.cost).sum(),
        share: 0.0,
        lines,
        key,
    }
}

impl ScenarioBreakdown {
    pub fn bucket(&self, key: &BucketKey) -> Option<&ScenarioBucket> {
        self.buckets.iter().find(|b| &b.key == key)
    }
}
