mod plan;
mod recipe;

pub use plan::{PlannedDay, PlannedMeal};
pub use recipe::{Ingredient, MealSlotOptions, Recipe};
