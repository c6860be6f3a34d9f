pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod report;
pub mod state;

pub use engine::{
    ScenarioBreakdown, ScenarioState, aggregate, apply_scenario, margin, normalize,
    reset_scenario,
};
pub use error::{CostError, Result};
pub use models::{CostBreakdown, Recipe};
