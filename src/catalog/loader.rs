use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::error::{PlanError, Result};
use crate::models::{Ingredient, MealSlotOptions, Recipe};

/// A recipe record as written in the catalog file.
#[derive(Debug, Deserialize)]
struct RawRecipe {
    name: Option<String>,
    ingredients: Option<IndexMap<String, RawIngredient>>,
}

#[derive(Debug, Deserialize)]
struct RawIngredient {
    unit: Option<String>,
    amount: Option<f64>,
}

/// Slot name -> recipe records, in file order.
type RawCatalog = IndexMap<String, Vec<RawRecipe>>;

/// Load a meal catalog from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<MealSlotOptions>> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// Parse a meal catalog from JSON text.
///
/// Slots, recipes and ingredients keep the order they are written in.
/// A slot with an empty recipe list is passed through; planning rejects it.
pub fn parse_catalog(json: &str) -> Result<Vec<MealSlotOptions>> {
    let raw: RawCatalog = serde_json::from_str(json)?;
    raw.into_iter()
        .map(|(slot, recipes)| -> Result<MealSlotOptions> {
            let options = recipes
                .into_iter()
                .enumerate()
                .map(|(index, record)| to_recipe(&slot, index, record))
                .collect::<Result<Vec<_>>>()?;
            debug!(slot = %slot, options = options.len(), "loaded meal slot");
            Ok(MealSlotOptions::new(slot, options))
        })
        .collect()
}

fn to_recipe(slot: &str, index: usize, record: RawRecipe) -> Result<Recipe> {
    let malformed = |reason: String| PlanError::MalformedRecord {
        slot: slot.to_string(),
        index,
        reason,
    };

    let name = record
        .name
        .ok_or_else(|| malformed("missing 'name'".to_string()))?;
    let ingredients = record
        .ingredients
        .ok_or_else(|| malformed(format!("recipe '{}' is missing 'ingredients'", name)))?;

    let ingredients = ingredients
        .into_iter()
        .map(|(ingredient, raw)| -> Result<Ingredient> {
            let unit = raw.unit.ok_or_else(|| {
                malformed(format!("ingredient '{}' of '{}' has no unit", ingredient, name))
            })?;
            let amount = raw.amount.ok_or_else(|| {
                malformed(format!("ingredient '{}' of '{}' has no amount", ingredient, name))
            })?;
            if !amount.is_finite() || amount < 0.0 {
                return Err(malformed(format!(
                    "ingredient '{}' of '{}' has invalid amount {}",
                    ingredient, name, amount
                )));
            }
            Ok(Ingredient::new(ingredient, unit, amount))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Recipe::new(name, ingredients))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG: &str = r#"{
        "breakfast": [
            {"name": "Oats", "ingredients": {"Oats": {"unit": "g", "amount": 50}, "Milk": {"unit": "ml", "amount": 200}}},
            {"name": "Toast", "ingredients": {"Bread": {"unit": "slice", "amount": 2}}}
        ],
        "lunch": [
            {"name": "Salad", "ingredients": {"Lettuce": {"unit": "g", "amount": 80}, "Feta": {"unit": "g", "amount": 30}}}
        ]
    }"#;

    #[test]
    fn test_parse_catalog_keeps_order() {
        let slots = parse_catalog(CATALOG).unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].name, "breakfast");
        assert_eq!(slots[1].name, "lunch");

        let oats = &slots[0].options[0];
        assert_eq!(oats.name, "Oats");
        assert_eq!(oats.ingredients[0], Ingredient::new("Oats", "g", 50.0));
        assert_eq!(oats.ingredients[1], Ingredient::new("Milk", "ml", 200.0));
        assert_eq!(slots[0].options[1].name, "Toast");
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let slots = load_catalog(file.path()).unwrap();
        assert_eq!(slots[1].options[0].ingredients.len(), 2);
    }

    #[test]
    fn test_missing_ingredients_is_malformed() {
        let json = r#"{"dinner": [{"name": "Curry", "ingredients": {}}, {"name": "Stew"}]}"#;
        let err = parse_catalog(json).unwrap_err();
        match err {
            PlanError::MalformedRecord { slot, index, .. } => {
                assert_eq!(slot, "dinner");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_name_is_malformed() {
        let json = r#"{"dinner": [{"ingredients": {"Rice": {"unit": "g", "amount": 1}}}]}"#;
        assert!(matches!(
            parse_catalog(json),
            Err(PlanError::MalformedRecord { index: 0, .. })
        ));
    }

    #[test]
    fn test_negative_amount_is_malformed() {
        let json = r#"{"dinner": [{"name": "Stew", "ingredients": {"Beef": {"unit": "g", "amount": -5}}}]}"#;
        assert!(matches!(
            parse_catalog(json),
            Err(PlanError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_empty_slot_passes_through() {
        let slots = parse_catalog(r#"{"snack": []}"#).unwrap();
        assert!(slots[0].is_empty());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_catalog("[1, 2]"), Err(PlanError::Json(_))));
    }
}
