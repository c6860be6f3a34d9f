use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::constants::*;

/// Color band of a margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginTier {
    Excellent,
    Good,
    Fair,
    Poor,
    Unknown,
}

impl MarginTier {
    pub fn label(&self) -> &'static str {
        match self {
            MarginTier::Excellent => "excellent",
            MarginTier::Good => "good",
            MarginTier::Fair => "fair",
            MarginTier::Poor => "poor",
            MarginTier::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MarginTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Margin value with its band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginResult {
    /// Percent; `None` when price or cost is missing.
    pub margin: Option<f64>,
    pub tier: MarginTier,
}

impl MarginResult {
    pub fn evaluate(price: f64, cost: f64) -> Self {
        let margin = margin(price, cost);
        Self {
            margin,
            tier: classify_margin(margin),
        }
    }
}

/// Prices at the fixed target food-cost percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingTiers {
    pub break_even: f64,
    pub recommended: f64,
    pub premium: f64,
}

/// Both inputs must be positive and finite for a ratio to mean anything.
#[inline]
fn both_known(price: f64, cost: f64) -> bool {
    price.is_finite() && cost.is_finite() && price > 0.0 && cost > 0.0
}

/// Profit margin in percent: `(price - cost) / price * 100`.
///
/// Returns `None` when `price <= 0` or `cost <= 0`, so that missing data never
/// reads as a 0% or 100% margin. Negative margins are returned as-is.
pub fn margin(price: f64, cost: f64) -> Option<f64> {
    if !both_known(price, cost) {
        return None;
    }
    let value = (price - cost) / price * 100.0;
    value.is_finite().then_some(value)
}

/// Food cost as a percentage of price, under the same `None` policy as `margin`.
pub fn food_cost_percentage(price: f64, cost: f64) -> Option<f64> {
    if !both_known(price, cost) {
        return None;
    }
    let value = cost / price * 100.0;
    value.is_finite().then_some(value)
}

/// Band a margin for display.
pub fn classify_margin(margin: Option<f64>) -> MarginTier {
    match margin {
        None => MarginTier::Unknown,
        Some(m) if m >= MARGIN_EXCELLENT => MarginTier::Excellent,
        Some(m) if m >= MARGIN_GOOD => MarginTier::Good,
        Some(m) if m >= MARGIN_FAIR => MarginTier::Fair,
        Some(_) => MarginTier::Poor,
    }
}

/// Break-even, recommended and premium prices for a food cost.
pub fn pricing_tiers(cost: f64) -> PricingTiers {
    PricingTiers {
        break_even: cost / BREAK_EVEN_FOOD_COST,
        recommended: cost / RECOMMENDED_FOOD_COST,
        premium: cost / PREMIUM_FOOD_COST,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_basic() {
        let m = margin(20.0, 6.0).unwrap();
        assert!((m - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_margin_negative_is_not_clamped() {
        let m = margin(10.0, 15.0).unwrap();
        assert!((m + 50.0).abs() < 1e-9);
        assert_eq!(classify_margin(Some(m)), MarginTier::Poor);
    }

    #[test]
    fn test_margin_missing_data_is_none() {
        assert_eq!(margin(0.0, 5.0), None);
        assert_eq!(margin(-3.0, 5.0), None);
        assert_eq!(margin(10.0, 0.0), None);
        assert_eq!(margin(10.0, -1.0), None);
        assert_eq!(margin(f64::NAN, 1.0), None);
        assert_eq!(margin(10.0, f64::INFINITY), None);
    }

    #[test]
    fn test_margin_extreme_inputs_stay_finite() {
        let m = margin(1.0e307, 1.0).unwrap();
        assert!((m - 100.0).abs() < 1e-9);
        let pct = food_cost_percentage(1.0e307, 1.0e306).unwrap();
        assert!((pct - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_classify_bands() {
        assert_eq!(classify_margin(Some(70.0)), MarginTier::Excellent);
        assert_eq!(classify_margin(Some(69.99)), MarginTier::Good);
        assert_eq!(classify_margin(Some(50.0)), MarginTier::Good);
        assert_eq!(classify_margin(Some(30.0)), MarginTier::Fair);
        assert_eq!(classify_margin(Some(29.9)), MarginTier::Poor);
        assert_eq!(classify_margin(None), MarginTier::Unknown);
        assert_eq!(MarginTier::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_food_cost_percentage() {
        let pct = food_cost_percentage(20.0, 6.0).unwrap();
        assert!((pct - 30.0).abs() < 1e-9);
        assert_eq!(food_cost_percentage(0.0, 6.0), None);
    }

    #[test]
    fn test_pricing_tiers() {
        let tiers = pricing_tiers(6.0);
        assert!((tiers.break_even - 20.0).abs() < 1e-9);
        assert!((tiers.recommended - 24.0).abs() < 1e-9);
        assert!((tiers.premium - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_margin_result() {
        let r = MarginResult::evaluate(10.0, 0.0);
        assert_eq!(r.margin, None);
        assert_eq!(r.tier, MarginTier::Unknown);
    }
}
