use clap::Parser;
use std::path::Path;
use tracing::info;

use meal_rota::catalog::load_catalog;
use meal_rota::cli::{Cli, Command, OutputFormat, PlanArgs};
use meal_rota::error::{PlanError, Result};
use meal_rota::interface::{
    display_days, display_slots, display_totals, export_days, export_totals, plan_to_json,
    prompt_days, prompt_yes_no, write_plan_json,
};
use meal_rota::logging::init_tracing;
use meal_rota::models::MealSlotOptions;
use meal_rota::planner::{build_cookbook, build_cookbook_seeded, Cookbook, DEFAULT_DAYS};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(&cli.file, &args),
        Command::Slots => cmd_slots(&cli.file),
    }
}

fn read_catalog(file_path: &str) -> Result<Vec<MealSlotOptions>> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(PlanError::InvalidInput(format!(
            "meal catalog not found: {}",
            file_path
        )));
    }

    let slots = load_catalog(path)?;
    info!(file = file_path, slots = slots.len(), "loaded meal catalog");
    Ok(slots)
}

/// Plan meals and print the day table and shopping list.
fn cmd_plan(file_path: &str, args: &PlanArgs) -> Result<()> {
    let slots = read_catalog(file_path)?;

    let days = match args.days {
        Some(days) => days,
        None if args.interactive => prompt_days(DEFAULT_DAYS)?,
        None => DEFAULT_DAYS,
    };

    let config = args.plan_config();
    let cookbook = match args.seed {
        Some(seed) => build_cookbook_seeded(days, &slots, seed, &config)?,
        None => build_cookbook(days, &slots, &mut rand::thread_rng(), &config)?,
    };

    match args.format {
        OutputFormat::Table => {
            display_days(&cookbook);
            display_totals(&cookbook);
        }
        OutputFormat::Json => println!("{}", plan_to_json(&cookbook)?),
    }

    write_exports(&cookbook, args)
}

fn write_exports(cookbook: &Cookbook, args: &PlanArgs) -> Result<()> {
    if let Some(path) = &args.export_days {
        if confirm_write(path, args.interactive)? {
            export_days(cookbook, path)?;
            println!("Day table written to {}", path.display());
        }
    }

    if let Some(path) = &args.export_totals {
        if confirm_write(path, args.interactive)? {
            export_totals(cookbook, path)?;
            println!("Shopping list written to {}", path.display());
        }
    }

    if let Some(path) = &args.export_json {
        if confirm_write(path, args.interactive)? {
            write_plan_json(cookbook, path)?;
            println!("Plan written to {}", path.display());
        }
    }

    Ok(())
}

/// Ask before replacing an existing file when running interactively.
fn confirm_write(path: &Path, interactive: bool) -> Result<bool> {
    if !interactive || !path.exists() {
        return Ok(true);
    }

    let overwrite = prompt_yes_no(&format!("Overwrite {}?", path.display()), false)?;
    if !overwrite {
        println!("Skipped {}", path.display());
    }
    Ok(overwrite)
}

/// List the catalog's meal slots.
fn cmd_slots(file_path: &str) -> Result<()> {
    let slots = read_catalog(file_path)?;
    display_slots(&slots);
    Ok(())
}
