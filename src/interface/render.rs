use crate::engine::{MarginResult, PricingTiers, ScenarioBreakdown};
use crate::models::{BucketKey, CostBasis, CostBreakdown, Recipe};
use crate::report::CostReportRow;

fn money(value: Option<f64>) -> String {
    value
        .map(|v| format!("${:.2}", v))
        .unwrap_or_else(|| "--".to_string())
}

fn percent(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}%", v))
        .unwrap_or_else(|| "N/A".to_string())
}

fn basis_tag(basis: CostBasis) -> &'static str {
    match basis {
        CostBasis::Converted => "",
        CostBasis::NaiveFallback => "  [unconverted]",
        CostBasis::Unpriced => "  [no price]",
    }
}

/// Display a recipe's cost breakdown.
pub fn display_breakdown(recipe: &Recipe, breakdown: &CostBreakdown) {
    println!();
    println!("=== {} ===", recipe.name);
    println!();

    let max_name_len = breakdown
        .lines
        .iter()
        .map(|l| l.ingredient_name.len())
        .max()
        .unwrap_or(10);

    if breakdown.lines.is_empty() {
        println!("  (no ingredients)");
    }

    if breakdown.components.is_empty() {
        for line in &breakdown.lines {
            println!(
                "  {:<width$}  {:>8.3} {:<6} ${:>8.2}{}",
                line.ingredient_name,
                line.quantity,
                line.unit,
                line.cost,
                basis_tag(line.basis),
                width = max_name_len
            );
        }
    } else {
        for component in &breakdown.components {
            println!(
                "{} - ${:.2} ({:.1}% of total)",
                component.name,
                component.cost,
                component.share * 100.0
            );
            for line in breakdown
                .lines
                .iter()
                .filter(|l| matches!(&l.bucket, BucketKey::Component(id) if *id == component.id))
            {
                println!(
                    "    {:<width$}  {:>8.3} {:<6} ${:>8.2}{}",
                    line.ingredient_name,
                    line.quantity,
                    line.unit,
                    line.cost,
                    basis_tag(line.basis),
                    width = max_name_len
                );
            }
        }
    }

    println!();
    println!("Total food cost: ${:.2}", breakdown.total_cost);

    if !breakdown.has_complete_data {
        if breakdown.missing_price_ingredients.is_empty() {
            println!("Cost data incomplete: recipe has no ingredients.");
        } else {
            let names: Vec<&str> = breakdown
                .missing_price_ingredients
                .iter()
                .map(|m| m.ingredient_name.as_str())
                .collect();
            println!(
                "Cost data incomplete: {} ingredient(s) without price: {}",
                breakdown.missing_price_count(),
                names.join(", ")
            );
        }
    }
}

/// Display margin, food-cost percentage and pricing tiers.
pub fn display_margin(
    price: Option<f64>,
    margin: &MarginResult,
    food_cost_pct: Option<f64>,
    tiers: &PricingTiers,
) {
    println!("Menu price: {}", money(price));
    println!("Margin: {} ({})", percent(margin.margin), margin.tier);
    println!("Food cost: {}", percent(food_cost_pct));
    println!(
        "Pricing at 30/25/20% food cost: break-even ${:.2} | recommended ${:.2} | premium ${:.2}",
        tiers.break_even, tiers.recommended, tiers.premium
    );
    println!();
}

/// Display a what-if scenario next to the base figures.
pub fn display_scenario(scenario: &ScenarioBreakdown) {
    println!();
    println!("=== What-if ===");
    println!();

    let max_name_len = scenario
        .buckets
        .iter()
        .map(|b| b.name.len())
        .max()
        .unwrap_or(10);

    for bucket in &scenario.buckets {
        println!(
            "  {:<width$}  {:>5.0}%  ${:>8.2} -> ${:>8.2}",
            bucket.name,
            bucket.multiplier * 100.0,
            bucket.base_cost,
            bucket.cost,
            width = max_name_len
        );
    }

    let sign = if scenario.cost_delta >= 0.0 { "+" } else { "-" };
    println!();
    println!(
        "Food cost: ${:.2} -> ${:.2} ({}${:.2})",
        scenario.base_total_cost,
        scenario.total_cost,
        sign,
        scenario.cost_delta.abs()
    );
    display_margin(
        scenario.price,
        &scenario.margin,
        scenario.food_cost_percentage,
        &scenario.pricing,
    );
}

/// Display the menu cost table.
pub fn display_report(rows: &[CostReportRow]) {
    if rows.is_empty() {
        println!("No menu items in snapshot.");
        return;
    }

    let max_name_len = rows.iter().map(|r| r.name.len()).max().unwrap_or(10);

    println!();
    println!(
        "{:<width$}  {:>9}  {:>9}  {:>8}  {:>10}  {}",
        "Item",
        "Price",
        "Cost",
        "Margin",
        "Tier",
        "Data",
        width = max_name_len
    );

    for row in rows {
        let data = if row.has_complete_data {
            "complete".to_string()
        } else if row.missing_price_count > 0 {
            format!("{} missing", row.missing_price_count)
        } else {
            "empty".to_string()
        };

        println!(
            "{:<width$}  {:>9}  {:>9}  {:>8}  {:>10}  {}",
            row.name,
            money(row.menu_price),
            format!("${:.2}", row.total_cost),
            percent(row.margin),
            row.tier.label(),
            data,
            width = max_name_len
        );
    }
    println!();
}
