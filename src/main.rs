use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use menu_cost_engine::cli::{Cli, Command};
use menu_cost_engine::engine::{
    MarginResult, UnitConverter, aggregate, apply_scenario, food_cost_percentage, pricing_tiers,
    reset_scenario,
};
use menu_cost_engine::error::Result;
use menu_cost_engine::interface::{
    WhatIfAction, display_breakdown, display_margin, display_report, display_scenario,
    prompt_action, prompt_bucket, prompt_menu_item, prompt_multiplier, prompt_price_override,
    prompt_yes_no,
};
use menu_cost_engine::report::{build_report, sort_by_margin, write_cost_report};
use menu_cost_engine::state::{MenuCatalog, load_snapshot};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_filter());

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let converter = cli.converter.build();
    let command = cli.command.unwrap_or_default();

    let Some(catalog) = open_catalog(&cli.file)? else {
        return Ok(());
    };

    match command {
        Command::Report { out } => cmd_report(&catalog, converter.as_ref(), out),
        Command::Cost { item } => cmd_cost(&catalog, converter.as_ref(), &item),
        Command::WhatIf { item } => cmd_what_if(&catalog, converter.as_ref(), item),
    }
}

/// Load the snapshot, or explain why there is nothing to work with.
fn open_catalog(file_path: &str) -> Result<Option<MenuCatalog>> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Snapshot file not found: {}", file_path);
        eprintln!("Export the menu data to menu_snapshot.json or pass --file.");
        return Ok(None);
    }

    let catalog = MenuCatalog::new(load_snapshot(path)?);
    if catalog.is_empty() {
        println!("Snapshot has no menu items.");
        return Ok(None);
    }

    Ok(Some(catalog))
}

/// Print the cost table for every menu item.
fn cmd_report(
    catalog: &MenuCatalog,
    converter: &dyn UnitConverter,
    out: Option<PathBuf>,
) -> Result<()> {
    let recipes = catalog.recipes(converter)?;
    let mut rows = build_report(&recipes);
    sort_by_margin(&mut rows);

    display_report(&rows);

    let incomplete = rows.iter().filter(|r| !r.has_complete_data).count();
    if incomplete > 0 {
        println!("{} of {} items have incomplete cost data.", incomplete, rows.len());
    }

    if let Some(path) = out {
        write_cost_report(&rows, &path)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

/// Print the breakdown and margin of one menu item.
fn cmd_cost(catalog: &MenuCatalog, converter: &dyn UnitConverter, item: &str) -> Result<()> {
    let recipe = catalog.recipe_for(item, converter)?;
    let breakdown = aggregate(&recipe);
    let price = recipe.price_or_zero();

    display_breakdown(&recipe, &breakdown);
    display_margin(
        recipe.menu_price,
        &MarginResult::evaluate(price, breakdown.total_cost),
        food_cost_percentage(price, breakdown.total_cost),
        &pricing_tiers(breakdown.total_cost),
    );

    Ok(())
}

/// Interactive portion scaling and price what-ifs.
fn cmd_what_if(
    catalog: &MenuCatalog,
    converter: &dyn UnitConverter,
    item: Option<String>,
) -> Result<()> {
    let key = match item {
        Some(item) => item,
        None => {
            let index = prompt_menu_item(&catalog.names())?;
            match catalog.key_at(index) {
                Some(key) => key,
                None => return Ok(()),
            }
        }
    };

    let recipe = catalog.recipe_for(&key, converter)?;
    let breakdown = aggregate(&recipe);
    display_breakdown(&recipe, &breakdown);

    let buckets = recipe.bucket_keys();
    let bucket_names: Vec<String> = buckets
        .iter()
        .map(|k| recipe.bucket_name(k).unwrap_or("?").to_string())
        .collect();

    let mut state = reset_scenario();
    display_scenario(&apply_scenario(&recipe, &breakdown, &state));

    loop {
        state = match prompt_action()? {
            WhatIfAction::Scale => {
                let index = prompt_bucket(&bucket_names)?;
                let key = buckets[index].clone();
                let multiplier = prompt_multiplier(&bucket_names[index], state.multiplier(&key))?;
                state.apply_multiplier(key, multiplier)
            }
            WhatIfAction::SetPrice => {
                let price = prompt_price_override(state.price_override())?;
                state.set_price_override(price)
            }
            WhatIfAction::ClearPrice => state.set_price_override(None),
            WhatIfAction::Reset => {
                if state.is_identity() || prompt_yes_no("Discard all adjustments?", true)? {
                    state.reset()
                } else {
                    state
                }
            }
            WhatIfAction::Done => break,
        };

        display_scenario(&apply_scenario(&recipe, &breakdown, &state));
    }

    Ok(())
}
