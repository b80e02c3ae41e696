use dialoguer::{Confirm, Input};

use crate::error::{PlanError, Result};

/// Prompt for the number of days to plan.
pub fn prompt_days(default: i64) -> Result<i64> {
    let input: String = Input::new()
        .with_prompt("How many days should the plan cover?")
        .default(default.to_string())
        .interact_text()?;

    let days: i64 = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))?;

    if days <= 0 {
        return Err(PlanError::InvalidInput(
            "Number of days must be at least 1".to_string(),
        ));
    }

    Ok(days)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
