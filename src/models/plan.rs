use serde::Serialize;

use crate::models::Recipe;

/// The recipe drawn for one meal slot on one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedMeal {
    /// Label of the slot this meal fills.
    pub slot_name: String,

    /// The selected recipe.
    pub recipe: Recipe,
}

impl PlannedMeal {
    pub fn new(slot_name: String, recipe: Recipe) -> Self {
        Self { slot_name, recipe }
    }
}

/// One day of the plan: a 1-based day number and one meal per slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedDay {
    pub day: u32,
    pub meals: Vec<PlannedMeal>,
}

impl PlannedDay {
    /// Name of the recipe planned for `slot_name`, if the day has that slot.
    pub fn recipe_for(&self, slot_name: &str) -> Option<&str> {
        self.meals
            .iter()
            .find(|m| m.slot_name == slot_name)
            .map(|m| m.recipe.name.as_str())
    }
}
