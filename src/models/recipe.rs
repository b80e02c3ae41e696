use serde::{Deserialize, Serialize};

/// A single ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub unit: String,
    pub amount: f64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, unit: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            amount,
        }
    }
}

/// A named recipe with its ingredient lines.
///
/// Ingredient names are expected to be unique within a recipe but this is not
/// enforced; a repeated name is tallied once per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            name: name.into(),
            ingredients,
        }
    }
}

/// The candidate recipes for one meal slot (e.g. "breakfast").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSlotOptions {
    pub name: String,
    pub options: Vec<Recipe>,
}

impl MealSlotOptions {
    pub fn new(name: impl Into<String>, options: Vec<Recipe>) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    /// A slot can only be drawn from when it has at least one option.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
