use rand::Rng;

use crate::error::{PlanError, Result};
use crate::models::{MealSlotOptions, PlannedMeal};

/// Fail on the first slot that has nothing to draw from.
pub fn ensure_drawable(slots: &[MealSlotOptions]) -> Result<()> {
    match slots.iter().find(|s| s.is_empty()) {
        Some(slot) => Err(PlanError::InvalidInput(format!(
            "meal slot '{}' has no recipe options",
            slot.name
        ))),
        None => Ok(()),
    }
}

/// Draw one recipe per slot, uniformly at random, in slot order.
///
/// All slots are checked before any randomness is consumed.
pub fn select_day<R: Rng>(
    slots: &[MealSlotOptions],
    rng: &mut R,
) -> Result<Vec<PlannedMeal>> {
    ensure_drawable(slots)?;

    Ok(slots
        .iter()
        .map(|slot| {
            let index = rng.gen_range(0..slot.options.len());
            PlannedMeal::new(slot.name.clone(), slot.options[index].clone())
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ingredient, Recipe};
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn slot(name: &str, recipes: &[&str]) -> MealSlotOptions {
        MealSlotOptions::new(
            name,
            recipes
                .iter()
                .map(|r| Recipe::new(*r, vec![Ingredient::new("Water", "ml", 100.0)]))
                .collect(),
        )
    }

    #[test]
    fn test_select_day_preserves_slot_order() {
        let slots = vec![
            slot("breakfast", &["Oats", "Toast"]),
            slot("lunch", &["Salad"]),
            slot("dinner", &["Curry", "Pasta", "Stew"]),
        ];
        let mut rng = StdRng::seed_from_u64(7);

        let meals = select_day(&slots, &mut rng).unwrap();
        let names: Vec<&str> = meals.iter().map(|m| m.slot_name.as_str()).collect();
        assert_eq!(names, vec!["breakfast", "lunch", "dinner"]);
        assert_eq!(meals[1].recipe.name, "Salad");
    }

    #[test]
    fn test_select_day_draws_from_own_slot() {
        let slots = vec![slot("breakfast", &["Oats", "Toast"]), slot("dinner", &["Curry", "Stew"])];
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..50 {
            let meals = select_day(&slots, &mut rng).unwrap();
            assert!(["Oats", "Toast"].contains(&meals[0].recipe.name.as_str()));
            assert!(["Curry", "Stew"].contains(&meals[1].recipe.name.as_str()));
        }
    }

    #[test]
    fn test_select_day_with_fixed_source() {
        let slots = vec![slot("lunch", &["Wrap", "Soup", "Bowl"])];
        let mut rng = StepRng::new(0, 0);

        let meals = select_day(&slots, &mut rng).unwrap();
        assert_eq!(meals[0].recipe.name, "Wrap");
    }

    #[test]
    fn test_select_day_covers_every_option() {
        let slots = vec![slot("dinner", &["Curry", "Pasta", "Stew"])];
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            let meals = select_day(&slots, &mut rng).unwrap();
            seen.insert(meals[0].recipe.name.clone());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_select_day_empty_slot_names_slot() {
        let slots = vec![slot("breakfast", &["Oats"]), slot("supper", &[])];
        let mut rng = StdRng::seed_from_u64(0);

        let err = select_day(&slots, &mut rng).unwrap_err();
        match err {
            PlanError::InvalidInput(msg) => assert!(msg.contains("supper")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
