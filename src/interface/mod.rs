pub mod export;
pub mod prompts;
pub mod render;

pub use export::{
    export_days, export_totals, plan_to_json, write_days_csv, write_plan_json, write_totals_csv,
    PlanReport,
};
pub use prompts::{prompt_days, prompt_yes_no};
pub use render::{display_days, display_slots, display_totals, format_days, format_totals};
