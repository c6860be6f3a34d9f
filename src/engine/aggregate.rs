use std::collections::HashSet;

use crate::models::{
    BucketKey, Component, ComponentCost, CostBreakdown, LineCost, MissingPrice, Recipe,
    RecipeBody, RecipeLine,
};

/// Sum of line costs, in line order.
pub fn sum_line_costs(lines: &[RecipeLine]) -> f64 {
    lines.iter().map(|l| l.cost).sum()
}

/// Share of `part` in `total`, 0.0 when the total is not positive.
#[inline]
pub fn share_of(part: f64, total: f64) -> f64 {
    if total > 0.0 { part / total } else { 0.0 }
}

/// Roll a recipe's line costs up into a `CostBreakdown`.
///
/// A recipe with no lines at all is never complete.
pub fn aggregate(recipe: &Recipe) -> CostBreakdown {
    let (total_cost, components) = match &recipe.body {
        RecipeBody::Flat(lines) => (sum_line_costs(lines), Vec::new()),
        RecipeBody::Structured(components) => aggregate_components(components),
    };

    let lines: Vec<LineCost> = recipe
        .lines()
        .map(|(bucket, line)| line_cost(bucket, line))
        .collect();

    let missing_price_ingredients = missing_prices(&lines);
    let ingredient_count = lines.len();
    let has_complete_data = ingredient_count > 0 && lines.iter().all(|l| l.has_price);

    CostBreakdown {
        total_cost,
        components,
        lines,
        missing_price_ingredients,
        ingredient_count,
        has_complete_data,
    }
}

fn aggregate_components(components: &[Component]) -> (f64, Vec<ComponentCost>) {
    let costs: Vec<f64> = components.iter().map(|c| sum_line_costs(&c.lines)).collect();
    let total: f64 = costs.iter().sum();

    let rollup = components
        .iter()
        .zip(costs)
        .map(|(component, cost)| ComponentCost {
            id: component.id.clone(),
            name: component.name.clone(),
            cost,
            share: share_of(cost, total),
        })
        .collect();

    (total, rollup)
}

fn line_cost(bucket: BucketKey, line: &RecipeLine) -> LineCost {
    LineCost {
        bucket,
        ingredient_id: line.ingredient.id.clone(),
        ingredient_name: line.ingredient.name.clone(),
        quantity: line.quantity,
        unit: line.unit.clone(),
        cost: line.cost,
        basis: line.basis,
        has_price: line.has_price(),
    }
}

fn missing_prices(lines: &[LineCost]) -> Vec<MissingPrice> {
    let mut seen = HashSet::new();
    lines
        .iter()
        .filter(|l| !l.has_price)
        .filter(|l| seen.insert(l.ingredient_id.clone()))
        .map(|l| MissingPrice {
            ingredient_id: l.ingredient_id.clone(),
            ingredient_name: l.ingredient_name.clone(),
        })
        .collect()
}
