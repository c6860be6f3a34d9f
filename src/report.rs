use std::cmp::Ordering;
use std::path::Path;

use serde::Serialize;

use crate::engine::{MarginResult, MarginTier, aggregate, food_cost_percentage, pricing_tiers};
use crate::error::Result;
use crate::models::{CostBreakdown, Recipe};

/// One line of the menu cost table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostReportRow {
    pub id: String,
    pub name: String,
    pub menu_price: Option<f64>,
    pub total_cost: f64,
    pub food_cost_pct: Option<f64>,
    pub margin: Option<f64>,
    pub tier: MarginTier,
    pub break_even: f64,
    pub recommended: f64,
    pub premium: f64,
    pub missing_price_count: usize,
    pub has_complete_data: bool,
}

impl CostReportRow {
    pub fn new(recipe: &Recipe, breakdown: &CostBreakdown) -> Self {
        let price = recipe.price_or_zero();
        let margin = MarginResult::evaluate(price, breakdown.total_cost);
        let tiers = pricing_tiers(breakdown.total_cost);

        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            menu_price: recipe.menu_price,
            total_cost: breakdown.total_cost,
            food_cost_pct: food_cost_percentage(price, breakdown.total_cost),
            margin: margin.margin,
            tier: margin.tier,
            break_even: tiers.break_even,
            recommended: tiers.recommended,
            premium: tiers.premium,
            missing_price_count: breakdown.missing_price_count(),
            has_complete_data: breakdown.has_complete_data,
        }
    }
}

/// Aggregate every recipe and build its report row.
pub fn build_report(recipes: &[Recipe]) -> Vec<CostReportRow> {
    recipes
        .iter()
        .map(|r| CostReportRow::new(r, &aggregate(r)))
        .collect()
}

/// Sort rows by margin, highest first. Unknown margins go last.
pub fn sort_by_margin(rows: &mut [CostReportRow]) {
    rows.sort_by(|a, b| match (a.margin, b.margin) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.name.cmp(&b.name),
    });
}

fn opt(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format!("{:.*}", decimals, v))
        .unwrap_or_default()
}

/// Write report rows to a CSV file.
pub fn write_cost_report(rows: &[CostReportRow], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "name",
        "menu_price",
        "total_cost",
        "food_cost_pct",
        "margin",
        "tier",
        "break_even",
        "recommended",
        "premium",
        "missing_price_count",
        "has_complete_data",
    ])?;

    // Missing values are left blank rather than written as 0
    for row in rows {
        wtr.write_record([
            row.id.clone(),
            row.name.clone(),
            opt(row.menu_price, 2),
            format!("{:.2}", row.total_cost),
            opt(row.food_cost_pct, 1),
            opt(row.margin, 1),
            row.tier.label().to_string(),
            format!("{:.2}", row.break_even),
            format!("{:.2}", row.recommended),
            format!("{:.2}", row.premium),
            row.missing_price_count.to_string(),
            row.has_complete_data.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
