pub mod prompts;
pub mod render;

pub use prompts::{
    WhatIfAction, prompt_action, prompt_bucket, prompt_menu_item, prompt_multiplier,
    prompt_price_override, prompt_yes_no,
};
pub use render::{display_breakdown, display_margin, display_report, display_scenario};
