use std::fs::File;
use std::io::Write;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::models::PlannedDay;
use crate::planner::constants::format_amount;
use crate::planner::{Cookbook, TallyEntry, UnitConflict};

/// JSON view of a finished plan.
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    pub days: &'a [PlannedDay],
    pub total_ingredients: &'a IndexMap<String, TallyEntry>,
    #[serde(skip_serializing_if = "no_conflicts")]
    pub unit_conflicts: &'a [UnitConflict],
}

fn no_conflicts(conflicts: &&[UnitConflict]) -> bool {
    conflicts.is_empty()
}

impl<'a> From<&'a Cookbook> for PlanReport<'a> {
    fn from(cookbook: &'a Cookbook) -> Self {
        Self {
            days: cookbook.days(),
            total_ingredients: cookbook.total_ingredients(),
            unit_conflicts: cookbook.tally().conflicts(),
        }
    }
}

/// Pretty-printed JSON document for the plan.
pub fn plan_to_json(cookbook: &Cookbook) -> Result<String> {
    Ok(serde_json::to_string_pretty(&PlanReport::from(cookbook))?)
}

/// Write the plan as JSON.
pub fn write_plan_json(cookbook: &Cookbook, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(plan_to_json(cookbook)?.as_bytes())?;
    info!(path = %path.display(), "wrote plan json");
    Ok(())
}

/// Write the day-by-slot table as CSV.
pub fn write_days_csv<W: Write>(cookbook: &Cookbook, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let slots = cookbook.slot_names();

    let mut header = vec!["day"];
    header.extend(slots.iter().copied());
    wtr.write_record(&header)?;

    for day in cookbook.days() {
        let mut record = vec![day.day.to_string()];
        record.extend(
            slots
                .iter()
                .map(|slot| day.recipe_for(slot).unwrap_or_default().to_string()),
        );
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the ingredient totals as CSV.
pub fn write_totals_csv<W: Write>(cookbook: &Cookbook, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["ingredient", "unit", "amount"])?;

    for (name, entry) in cookbook.total_ingredients() {
        wtr.write_record([
            name.as_str(),
            entry.unit.as_str(),
            format_amount(entry.amount).as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the day table to a CSV file.
pub fn export_days(cookbook: &Cookbook, path: &Path) -> Result<()> {
    write_days_csv(cookbook, File::create(path)?)?;
    info!(path = %path.display(), days = cookbook.len(), "exported day table");
    Ok(())
}

/// Write the totals table to a CSV file.
pub fn export_totals(cookbook: &Cookbook, path: &Path) -> Result<()> {
    write_totals_csv(cookbook, File::create(path)?)?;
    info!(
        path = %path.display(),
        ingredients = cookbook.total_ingredients().len(),
        "exported shopping list"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ingredient, PlannedMeal, Recipe};
    use crate::planner::UnitPolicy;
    use tempfile::NamedTempFile;

    fn sample_cookbook() -> Cookbook {
        let mut cookbook = Cookbook::new(UnitPolicy::FirstUnitWins);
        cookbook
            .add_day(
                1,
                vec![
                    PlannedMeal::new(
                        "breakfast".to_string(),
                        Recipe::new("Pancakes", vec![Ingredient::new("Flour", "g", 120.0)]),
                    ),
                    PlannedMeal::new(
                        "dinner".to_string(),
                        Recipe::new("Chili, Mild", vec![Ingredient::new("Beans", "can", 1.5)]),
                    ),
                ],
            )
            .unwrap();
        cookbook
    }

    #[test]
    fn test_write_days_csv() {
        let mut buf = Vec::new();
        write_days_csv(&sample_cookbook(), &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "day,breakfast,dinner\n1,Pancakes,\"Chili, Mild\"\n");
    }

    #[test]
    fn test_write_totals_csv() {
        let mut buf = Vec::new();
        write_totals_csv(&sample_cookbook(), &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "ingredient,unit,amount\nFlour,g,120\nBeans,can,1.50\n");
    }

    #[test]
    fn test_plan_json_shape() {
        let json = plan_to_json(&sample_cookbook()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["days"][0]["day"], 1);
        assert_eq!(value["days"][0]["meals"][1]["slot_name"], "dinner");
        assert_eq!(value["total_ingredients"]["Flour"]["unit"], "g");
        assert_eq!(value["total_ingredients"]["Beans"]["amount"], 1.5);
        assert!(value.get("unit_conflicts").is_none());
    }

    #[test]
    fn test_export_files() {
        let cookbook = sample_cookbook();
        let days = NamedTempFile::new().unwrap();
        let totals = NamedTempFile::new().unwrap();

        export_days(&cookbook, days.path()).unwrap();
        export_totals(&cookbook, totals.path()).unwrap();

        let mut rdr = csv::Reader::from_path(totals.path()).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "Flour");
        assert!(std::fs::read_to_string(days.path()).unwrap().starts_with("day,"));
    }
}
