pub mod aggregate;
pub mod constants;
pub mod conversion;
pub mod loader;
pub mod margin;
pub mod scenario;

pub use aggregate::{aggregate, share_of, sum_line_costs};
pub use constants::*;
pub use conversion::{
    ConversionError, NaiveConverter, StandardUnitConverter, UnitConverter, UnitFamily,
    lookup_unit, normalize_unit,
};
pub use loader::{normalize, normalize_record};
pub use margin::{
    MarginResult, MarginTier, PricingTiers, classify_margin, food_cost_percentage, margin,
    pricing_tiers,
};
pub use scenario::{
    ScaledLine, ScenarioBreakdown, ScenarioBucket, ScenarioState, apply_scenario,
    coerce_multiplier, parse_multiplier, parse_multiplier_percent, parse_price_override,
    reset_scenario,
};
