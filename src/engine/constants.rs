/// Bucket key used for a flat recipe's single scalable group.
pub const FLAT_BUCKET_KEY: &str = "lines";

/// Multiplier applied to a bucket that has no entry in the scenario.
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Pricing tiers (target food-cost percentages)
// ─────────────────────────────────────────────────────────────────────────────

/// Food-cost share at which the item breaks even on the house target.
pub const BREAK_EVEN_FOOD_COST: f64 = 0.30;

/// Food-cost share for the recommended price.
pub const RECOMMENDED_FOOD_COST: f64 = 0.25;

/// Food-cost share for the premium price.
pub const PREMIUM_FOOD_COST: f64 = 0.20;

// ─────────────────────────────────────────────────────────────────────────────
// Margin bands (percent)
// ─────────────────────────────────────────────────────────────────────────────

pub const MARGIN_EXCELLENT: f64 = 70.0;
pub const MARGIN_GOOD: f64 = 50.0;
pub const MARGIN_FAIR: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// What-if UI bounds
// ─────────────────────────────────────────────────────────────────────────────

/// Slider bounds in percent. The engine accepts any non-negative multiplier.
pub const MULTIPLIER_UI_MIN_PCT: f64 = 0.0;
pub const MULTIPLIER_UI_MAX_PCT: f64 = 200.0;
