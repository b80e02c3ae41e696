use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::error::{PlanError, Result};
use crate::models::MealSlotOptions;
use crate::planner::constants::NEAR_DUPLICATE_THRESHOLD;
use crate::planner::cookbook::Cookbook;
use crate::planner::selection::{ensure_drawable, select_day};
use crate::planner::tally::UnitPolicy;

/// Settings for a planning run.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    pub unit_policy: UnitPolicy,
    /// Similarity at which ingredient names are reported as likely duplicates.
    /// Set to a value above 1.0 to disable the report.
    pub near_duplicate_threshold: f64,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            unit_policy: UnitPolicy::default(),
            near_duplicate_threshold: NEAR_DUPLICATE_THRESHOLD,
        }
    }
}

/// Plan `num_days` days from `slots` and return the populated cookbook.
///
/// Input is validated up front: a non-positive day count, an empty slot
/// list, or a slot without options fails before any day is drawn.
pub fn build_cookbook<R: Rng>(
    num_days: i64,
    slots: &[MealSlotOptions],
    rng: &mut R,
    config: &PlanConfig,
) -> Result<Cookbook> {
    if num_days <= 0 {
        return Err(PlanError::InvalidInput(format!(
            "number of days must be positive, got {}",
            num_days
        )));
    }
    let num_days = u32::try_from(num_days).map_err(|_| {
        PlanError::InvalidInput(format!("number of days {} is too large", num_days))
    })?;

    if slots.is_empty() {
        return Err(PlanError::InvalidInput(
            "no meal slots to plan".to_string(),
        ));
    }
    ensure_drawable(slots)?;

    let mut cookbook = Cookbook::new(config.unit_policy);
    for day in 1..=num_days {
        let meals = select_day(slots, rng)?;
        debug!(
            day,
            recipes = ?meals.iter().map(|m| m.recipe.name.as_str()).collect::<Vec<_>>(),
            "planned day"
        );
        cookbook.add_day(day, meals)?;
    }

    for dup in cookbook
        .tally()
        .near_duplicates(config.near_duplicate_threshold)
    {
        warn!(
            first = %dup.first,
            second = %dup.second,
            similarity = dup.similarity,
            "ingredient names look like duplicates"
        );
    }

    info!(
        days = cookbook.len(),
        ingredients = cookbook.tally().len(),
        "built meal plan"
    );

    Ok(cookbook)
}

/// `build_cookbook` with a generator seeded from `seed`, for reproducible plans.
pub fn build_cookbook_seeded(
    num_days: i64,
    slots: &[MealSlotOptions],
    seed: u64,
    config: &PlanConfig,
) -> Result<Cookbook> {
    let mut rng = StdRng::seed_from_u64(seed);
    build_cookbook(num_days, slots, &mut rng, config)
}
