pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;

pub use error::{PlanError, Result};
pub use models::{Ingredient, MealSlotOptions, PlannedDay, PlannedMeal, Recipe};
pub use planner::{build_cookbook, Cookbook, PlanConfig};
