use std::collections::HashMap;

use clap::ValueEnum;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use tracing::{debug, warn};

use crate::error::{PlanError, Result};
use crate::models::Ingredient;

/// How the tally treats an ingredient whose unit differs from the one
/// already recorded under the same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum UnitPolicy {
    /// Keep the first unit seen and sum amounts regardless.
    #[default]
    FirstUnitWins,
    /// Like `FirstUnitWins`, but log every mismatch.
    Warn,
    /// Refuse the ingredient with `PlanError::UnitMismatch`.
    Strict,
}

/// Accumulated unit and amount for one ingredient name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TallyEntry {
    pub unit: String,
    pub amount: f64,
}

/// A unit conflict that was summed over instead of rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitConflict {
    pub ingredient: String,
    pub expected: String,
    pub found: String,
}

/// Two tallied names similar enough to probably be the same ingredient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearDuplicate {
    pub first: String,
    pub second: String,
    pub similarity: f64,
}

/// Running totals of ingredient amounts, keyed by name in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct IngredientTally {
    entries: IndexMap<String, TallyEntry>,
    policy: UnitPolicy,
    conflicts: Vec<UnitConflict>,
}

impl IngredientTally {
    pub fn new(policy: UnitPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn policy(&self) -> UnitPolicy {
        self.policy
    }

    /// Validate a batch of ingredients without touching the tally.
    ///
    /// Amounts must be finite and non-negative. Under `UnitPolicy::Strict`
    /// units must agree with the tally and with earlier lines of the batch.
    pub fn check_all<'a, I>(&self, ingredients: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Ingredient>,
    {
        let mut pending: HashMap<&'a str, &'a str> = HashMap::new();

        for ingredient in ingredients {
            if !ingredient.amount.is_finite() || ingredient.amount < 0.0 {
                return Err(PlanError::InvalidInput(format!(
                    "ingredient '{}' has invalid amount {}",
                    ingredient.name, ingredient.amount
                )));
            }

            if self.policy != UnitPolicy::Strict {
                continue;
            }

            let expected: &str = match self.entries.get(&ingredient.name) {
                Some(entry) => &entry.unit,
                None => *pending
                    .entry(ingredient.name.as_str())
                    .or_insert(ingredient.unit.as_str()),
            };

            if expected != ingredient.unit {
                return Err(PlanError::UnitMismatch {
                    ingredient: ingredient.name.clone(),
                    expected: expected.to_string(),
                    found: ingredient.unit.clone(),
                });
            }
        }

        Ok(())
    }

    /// Validate a single ingredient without touching the tally.
    pub fn check(&self, ingredient: &Ingredient) -> Result<()> {
        self.check_all(std::iter::once(ingredient))
    }

    /// Add an ingredient's amount to its running total.
    ///
    /// The first occurrence of a name fixes its unit.
    pub fn add(&mut self, ingredient: &Ingredient) -> Result<&mut Self> {
        self.check(ingredient)?;
        self.apply(ingredient);
        Ok(self)
    }

    /// Add an ingredient that already passed `check`.
    pub(crate) fn apply(&mut self, ingredient: &Ingredient) {
        let entry = self
            .entries
            .entry(ingredient.name.clone())
            .or_insert_with(|| TallyEntry {
                unit: ingredient.unit.clone(),
                amount: 0.0,
            });

        if entry.unit != ingredient.unit {
            let conflict = UnitConflict {
                ingredient: ingredient.name.clone(),
                expected: entry.unit.clone(),
                found: ingredient.unit.clone(),
            };
            if self.policy == UnitPolicy::Warn {
                warn!(
                    ingredient = %conflict.ingredient,
                    expected = %conflict.expected,
                    found = %conflict.found,
                    "unit mismatch, summing into first unit"
                );
            } else {
                debug!(ingredient = %conflict.ingredient, "unit mismatch ignored");
            }
            self.conflicts.push(conflict);
        }

        entry.amount += ingredient.amount;
    }

    /// Current totals.
    pub fn total(&self) -> &IndexMap<String, TallyEntry> {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&TallyEntry> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TallyEntry)> {
        self.entries.iter()
    }

    /// Unit conflicts summed over so far.
    pub fn conflicts(&self) -> &[UnitConflict] {
        &self.conflicts
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs of tallied names whose case-insensitive Jaro-Winkler similarity
    /// is at least `threshold`, most similar first.
    pub fn near_duplicates(&self, threshold: f64) -> Vec<NearDuplicate> {
        let names: Vec<(&String, String)> = self
            .entries
            .keys()
            .map(|name| (name, name.to_lowercase()))
            .collect();

        let mut found = Vec::new();
        for (i, (first, first_lower)) in names.iter().enumerate() {
            for (second, second_lower) in &names[i + 1..] {
                let similarity = jaro_winkler(first_lower, second_lower);
                if similarity >= threshold {
                    found.push(NearDuplicate {
                        first: (*first).clone(),
                        second: (*second).clone(),
                        similarity,
                    });
                }
            }
        }

        found.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        found
    }
}
