use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::planner::constants::DEFAULT_CATALOG_FILE;
use crate::planner::{PlanConfig, UnitPolicy};

/// Meal Rota: draws a multi-day meal plan from a recipe catalog and totals the shopping list.
#[derive(Parser, Debug)]
#[command(name = "meal_rota")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the meal catalog JSON file.
    #[arg(short, long, global = true, default_value = DEFAULT_CATALOG_FILE)]
    pub file: String,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan meals for a number of days and print the shopping list.
    Plan(PlanArgs),

    /// List the meal slots and recipe options in the catalog.
    Slots,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Number of days to plan (defaults to 5, or asks when --interactive).
    #[arg(short, long, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Seed for a reproducible plan.
    #[arg(long)]
    pub seed: Option<u64>,

    /// How to treat an ingredient listed in different units.
    #[arg(long, value_enum, default_value = "first-unit-wins")]
    pub unit_policy: UnitPolicy,

    /// Output format for the plan.
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Write the day table to this CSV file.
    #[arg(long)]
    pub export_days: Option<PathBuf>,

    /// Write the ingredient totals to this CSV file.
    #[arg(long)]
    pub export_totals: Option<PathBuf>,

    /// Write the whole plan to this JSON file.
    #[arg(long)]
    pub export_json: Option<PathBuf>,

    /// Ask for missing values and confirm before overwriting files.
    #[arg(short, long)]
    pub interactive: bool,
}

impl PlanArgs {
    pub fn plan_config(&self) -> PlanConfig {
        PlanConfig {
            unit_policy: self.unit_policy,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
