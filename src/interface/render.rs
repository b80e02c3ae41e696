use crate::models::MealSlotOptions;
use crate::planner::constants::format_amount;
use crate::planner::Cookbook;

fn format_row(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

/// Lay out rows under a header with every column padded to its widest cell.
fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(headers, &widths));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in rows {
        let cells: Vec<&str> = row.iter().map(|c| c.as_str()).collect();
        out.push_str(&format_row(&cells, &widths));
        out.push('\n');
    }
    out
}

/// One row per day, one column per meal slot.
pub fn format_days(cookbook: &Cookbook) -> String {
    let slots = cookbook.slot_names();
    let mut headers = vec!["day"];
    headers.extend(slots.iter().copied());

    let rows: Vec<Vec<String>> = cookbook
        .days()
        .iter()
        .map(|day| {
            let mut row = vec![day.day.to_string()];
            row.extend(
                slots
                    .iter()
                    .map(|slot| day.recipe_for(slot).unwrap_or("-").to_string()),
            );
            row
        })
        .collect();

    format_table(&headers, &rows)
}

/// One row per ingredient with its unit and total amount.
pub fn format_totals(cookbook: &Cookbook) -> String {
    let rows: Vec<Vec<String>> = cookbook
        .total_ingredients()
        .iter()
        .map(|(name, entry)| vec![name.clone(), entry.unit.clone(), format_amount(entry.amount)])
        .collect();

    format_table(&["ingredient", "unit", "amount"], &rows)
}

/// Display the day-by-slot plan followed by how often each recipe was picked.
pub fn display_days(cookbook: &Cookbook) {
    if cookbook.is_empty() {
        println!("No days planned.");
        return;
    }

    println!();
    println!("=== Meal Plan ({} days) ===", cookbook.len());
    println!();
    print!("{}", format_days(cookbook));

    println!();
    println!("--- Recipe picks ---");
    for (recipe, count) in cookbook.recipe_counts() {
        println!("  {:<24} x{}", recipe, count);
    }
    println!();
}

/// Display the consolidated ingredient totals.
pub fn display_totals(cookbook: &Cookbook) {
    if cookbook.total_ingredients().is_empty() {
        println!("No ingredients needed.");
        return;
    }

    println!();
    println!(
        "=== Shopping List ({} ingredients) ===",
        cookbook.total_ingredients().len()
    );
    println!();
    print!("{}", format_totals(cookbook));

    let conflicts = cookbook.tally().conflicts();
    if !conflicts.is_empty() {
        println!();
        println!("Note: {} line(s) were summed across different units:", conflicts.len());
        for c in conflicts {
            println!("  {} - '{}' counted as '{}'", c.ingredient, c.found, c.expected);
        }
    }
    println!();
}

/// Display each slot with its candidate recipes.
pub fn display_slots(slots: &[MealSlotOptions]) {
    if slots.is_empty() {
        println!("Catalog has no meal slots.");
        return;
    }

    println!();
    println!("=== Meal Slots ({}) ===", slots.len());
    println!();
    for slot in slots {
        let names: Vec<&str> = slot.options.iter().map(|r| r.name.as_str()).collect();
        println!("  {} ({} options): {}", slot.name, names.len(), names.join(", "));
    }
    println!();
}
