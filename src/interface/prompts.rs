use dialoguer::{Confirm, Input, Select};

use crate::engine::constants::{MULTIPLIER_UI_MAX_PCT, MULTIPLIER_UI_MIN_PCT};
use crate::engine::{parse_multiplier_percent, parse_price_override};
use crate::error::{CostError, Result};

/// Actions offered in the what-if loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhatIfAction {
    Scale,
    SetPrice,
    ClearPrice,
    Reset,
    Done,
}

const ACTIONS: [(WhatIfAction, &str); 5] = [
    (WhatIfAction::Scale, "Scale a portion"),
    (WhatIfAction::SetPrice, "Try a different price"),
    (WhatIfAction::ClearPrice, "Use the menu price"),
    (WhatIfAction::Reset, "Reset scenario"),
    (WhatIfAction::Done, "Done"),
];

/// Prompt for a menu item. Returns its index in `names`.
pub fn prompt_menu_item(names: &[String]) -> Result<usize> {
    if names.is_empty() {
        return Err(CostError::InvalidInput("No menu items to choose from".to_string()));
    }

    Ok(Select::new()
        .with_prompt("Which menu item?")
        .items(names)
        .default(0)
        .interact()?)
}

/// Prompt for the next what-if action.
pub fn prompt_action() -> Result<WhatIfAction> {
    let labels: Vec<&str> = ACTIONS.iter().map(|(_, label)| *label).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(ACTIONS
        .get(selection)
        .map(|(action, _)| *action)
        .unwrap_or(WhatIfAction::Done))
}

/// Prompt for which component to scale. Returns its index in `names`.
pub fn prompt_bucket(names: &[String]) -> Result<usize> {
    if names.len() == 1 {
        return Ok(0);
    }

    Ok(Select::new()
        .with_prompt("Which portion?")
        .items(names)
        .default(0)
        .interact()?)
}

/// Prompt for a portion size in percent and return it as a multiplier.
///
/// Empty or non-numeric input removes the portion (0%). Values outside the
/// slider range are pulled back into it.
pub fn prompt_multiplier(bucket_name: &str, current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Portion size for '{}' in % ({:.0}-{:.0})",
            bucket_name, MULTIPLIER_UI_MIN_PCT, MULTIPLIER_UI_MAX_PCT
        ))
        .default(format!("{:.0}", current * 100.0))
        .allow_empty(true)
        .interact_text()?;

    let multiplier = parse_multiplier_percent(&input);
    let bounded = multiplier.clamp(MULTIPLIER_UI_MIN_PCT / 100.0, MULTIPLIER_UI_MAX_PCT / 100.0);
    if bounded != multiplier {
        println!("Limited to {:.0}%", bounded * 100.0);
    }

    Ok(bounded)
}

/// Prompt for a hypothetical price. Invalid input falls back to the menu price.
pub fn prompt_price_override(current: Option<f64>) -> Result<Option<f64>> {
    let input: String = Input::new()
        .with_prompt("Hypothetical price (empty = menu price)")
        .default(current.map(|p| format!("{:.2}", p)).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let price = parse_price_override(&input);
    if price.is_none() && !input.trim().is_empty() {
        println!("'{}' is not a valid price; using the menu price.", input.trim());
    }

    Ok(price)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
