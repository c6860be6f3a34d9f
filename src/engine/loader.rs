use std::collections::HashSet;

use tracing::{debug, warn};

use crate::engine::conversion::UnitConverter;
use crate::error::{CostError, Result};
use crate::models::{
    Component, CostBasis, Ingredient, MenuItemRecord, RawComponent, RawIngredient, RawMenuItem,
    RawRecipeLine, Recipe, RecipeBody, RecipeLine,
};

/// Build a `Recipe` from raw store records.
///
/// Components win over flat lines whenever there is at least one component.
/// Each line is costed once through `converter`; a failing conversion falls
/// back to `quantity * unit_price` for that line only. Missing identifiers,
/// duplicate component ids and negative or non-finite quantities are rejected.
pub fn normalize(
    menu_item: &RawMenuItem,
    components: &[RawComponent],
    lines: &[RawRecipeLine],
    converter: &dyn UnitConverter,
) -> Result<Recipe> {
    let id = required_id(menu_item.id.as_deref(), "menu item")?;
    let name = menu_item
        .name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| id.clone());

    let body = if components.is_empty() {
        let lines = lines
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                let context = format!("menu item '{}' line {}", id, i + 1);
                build_line(
                    raw.quantity,
                    raw.unit.as_deref(),
                    raw.ingredient.as_ref(),
                    converter,
                    &context,
                )
            })
            .collect::<Result<Vec<_>>>()?;
        RecipeBody::Flat(lines)
    } else {
        if !lines.is_empty() {
            debug!(
                menu_item = %id,
                ignored = lines.len(),
                "Recipe has components; ignoring legacy flat lines"
            );
        }
        let components = components
            .iter()
            .map(|raw| build_component(raw, &id, converter))
            .collect::<Result<Vec<_>>>()?;

        let mut seen = HashSet::new();
        for component in &components {
            if !seen.insert(component.id.as_str()) {
                return Err(CostError::MalformedRecipe(format!(
                    "menu item '{}' has duplicate component id '{}'",
                    id, component.id
                )));
            }
        }
        RecipeBody::Structured(components)
    };

    Ok(Recipe {
        id,
        name,
        menu_price: menu_item.price,
        body,
    })
}

/// Normalize a snapshot record.
pub fn normalize_record(record: &MenuItemRecord, converter: &dyn UnitConverter) -> Result<Recipe> {
    normalize(
        &record.item,
        &record.components,
        &record.ingredients,
        converter,
    )
}

fn build_component(
    raw: &RawComponent,
    menu_item_id: &str,
    converter: &dyn UnitConverter,
) -> Result<Component> {
    let id = required_id(
        raw.id.as_deref(),
        &format!("component of menu item '{}'", menu_item_id),
    )?;
    let name = raw
        .name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| id.clone());

    let lines = raw
        .ingredients
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let context = format!("component '{}' line {}", id, i + 1);
            build_line(
                link.quantity,
                link.unit.as_deref(),
                link.ingredient.as_ref(),
                converter,
                &context,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Component { id, name, lines })
}

fn build_line(
    quantity: Option<f64>,
    unit: Option<&str>,
    ingredient: Option<&RawIngredient>,
    converter: &dyn UnitConverter,
    context: &str,
) -> Result<RecipeLine> {
    let raw = ingredient
        .ok_or_else(|| CostError::MalformedRecipe(format!("{} has no ingredient", context)))?;
    let ingredient = build_ingredient(raw, context)?;

    let quantity = quantity.unwrap_or(0.0);
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(CostError::MalformedRecipe(format!(
            "{} has invalid quantity {}",
            context, quantity
        )));
    }

    let unit = unit
        .filter(|u| !u.trim().is_empty())
        .unwrap_or(ingredient.unit.as_str())
        .to_string();

    let (cost, basis) = line_cost(quantity, &unit, &ingredient, converter);

    Ok(RecipeLine {
        ingredient,
        quantity,
        unit,
        cost,
        basis,
    })
}

fn build_ingredient(raw: &RawIngredient, context: &str) -> Result<Ingredient> {
    let id = required_id(raw.id.as_deref(), &format!("ingredient of {}", context))?;
    Ok(Ingredient {
        name: raw
            .name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| id.clone()),
        id,
        unit: raw.unit.clone().unwrap_or_default(),
        unit_price: raw.last_price,
        last_ordered_at: raw.last_ordered_at.clone(),
    })
}

/// Cost one line, degrading instead of failing.
fn line_cost(
    quantity: f64,
    unit: &str,
    ingredient: &Ingredient,
    converter: &dyn UnitConverter,
) -> (f64, CostBasis) {
    if !ingredient.has_price() {
        debug!(ingredient = %ingredient.debug_string(), "No usable price; line costs 0");
        return (0.0, CostBasis::Unpriced);
    }

    let price = ingredient.usable_price();
    let naive = quantity * price;

    match converter.standardized_cost(quantity, unit, price, ingredient) {
        Ok(cost) if cost.is_finite() && cost >= 0.0 => (cost, CostBasis::Converted),
        Ok(cost) => {
            warn!(
                ingredient = %ingredient.name,
                unit,
                cost,
                "Unit conversion returned an unusable cost; using quantity * price"
            );
            (naive, CostBasis::NaiveFallback)
        }
        Err(e) => {
            warn!(
                ingredient = %ingredient.name,
                unit,
                priced_unit = %ingredient.unit,
                error = %e,
                "Unit conversion failed; using quantity * price"
            );
            (naive, CostBasis::NaiveFallback)
        }
    }
}

fn required_id(value: Option<&str>, what: &str) -> Result<String> {
    match value.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(CostError::MalformedRecipe(format!("{} is missing an id", what))),
    }
}
