use indexmap::IndexMap;

use crate::error::{PlanError, Result};
use crate::models::{PlannedDay, PlannedMeal};
use crate::planner::tally::{IngredientTally, TallyEntry, UnitPolicy};

/// The running multi-day plan and its ingredient totals.
///
/// Days are only ever appended, in ascending day order, and every append
/// updates the tally in the same step.
#[derive(Debug, Clone, Default)]
pub struct Cookbook {
    days: Vec<PlannedDay>,
    tally: IngredientTally,
}

impl Cookbook {
    pub fn new(policy: UnitPolicy) -> Self {
        Self {
            days: Vec::new(),
            tally: IngredientTally::new(policy),
        }
    }

    /// Append a day and tally every ingredient of its meals.
    ///
    /// Nothing is changed if the day number is out of sequence or an
    /// ingredient is refused by the tally.
    pub fn add_day(&mut self, day: u32, meals: Vec<PlannedMeal>) -> Result<&mut Self> {
        if day == 0 {
            return Err(PlanError::InvalidInput("day numbers start at 1".to_string()));
        }
        if let Some(last) = self.days.last() {
            if day <= last.day {
                return Err(PlanError::InvalidInput(format!(
                    "day {} added after day {}",
                    day, last.day
                )));
            }
        }

        self.tally
            .check_all(meals.iter().flat_map(|m| m.recipe.ingredients.iter()))?;

        for ingredient in meals.iter().flat_map(|m| m.recipe.ingredients.iter()) {
            self.tally.apply(ingredient);
        }
        self.days.push(PlannedDay { day, meals });

        Ok(self)
    }

    /// Total of every ingredient across all planned days.
    pub fn total_ingredients(&self) -> &IndexMap<String, TallyEntry> {
        self.tally.total()
    }

    pub fn tally(&self) -> &IngredientTally {
        &self.tally
    }

    pub fn days(&self) -> &[PlannedDay] {
        &self.days
    }

    pub fn day(&self, day: u32) -> Option<&PlannedDay> {
        self.days.iter().find(|d| d.day == day)
    }

    /// Slot labels in the order of the first planned day.
    pub fn slot_names(&self) -> Vec<&str> {
        self.days
            .first()
            .map(|d| d.meals.iter().map(|m| m.slot_name.as_str()).collect())
            .unwrap_or_default()
    }

    /// How many times each recipe was picked, in first-picked order.
    pub fn recipe_counts(&self) -> IndexMap<&str, usize> {
        let mut counts = IndexMap::new();
        for meal in self.days.iter().flat_map(|d| d.meals.iter()) {
            *counts.entry(meal.recipe.name.as_str()).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
