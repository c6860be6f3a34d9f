use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::engine::{NaiveConverter, StandardUnitConverter, UnitConverter};

/// Menu cost engine: food cost, margins and what-if portion scaling for menu items.
#[derive(Parser, Debug)]
#[command(name = "menu_cost")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the store snapshot JSON file.
    #[arg(short, long, default_value = "menu_snapshot.json")]
    pub file: String,

    /// How recipe units are converted into priced units.
    #[arg(long, value_enum, default_value_t = ConverterKind::Standard)]
    pub converter: ConverterKind,

    /// Log more (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the cost table for every menu item.
    Report {
        /// Also write the table to this CSV file.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Show the cost breakdown, margin and pricing tiers of one menu item.
    Cost {
        /// Menu item id or name.
        item: String,
    },

    /// Scale portions and try prices interactively.
    WhatIf {
        /// Menu item id or name. Prompts when omitted.
        item: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Report { out: None }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConverterKind {
    /// Convert between mass, volume and count units.
    Standard,
    /// Multiply quantity by unit price, ignoring units.
    Naive,
}

impl ConverterKind {
    pub fn build(self) -> Box<dyn UnitConverter> {
        match self {
            ConverterKind::Standard => Box::new(StandardUnitConverter),
            ConverterKind::Naive => Box::new(NaiveConverter),
        }
    }
}

impl Cli {
    /// Default log filter when RUST_LOG is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
