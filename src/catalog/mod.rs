mod loader;

pub use loader::{load_catalog, parse_catalog};
