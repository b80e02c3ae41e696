pub mod builder;
pub mod constants;
pub mod cookbook;
pub mod selection;
pub mod tally;

pub use builder::{build_cookbook, build_cookbook_seeded, PlanConfig};
pub use constants::*;
pub use cookbook::Cookbook;
pub use selection::{ensure_drawable, select_day};
pub use tally::{IngredientTally, NearDuplicate, TallyEntry, UnitConflict, UnitPolicy};
