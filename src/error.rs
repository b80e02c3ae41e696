use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Malformed recipe #{index} in slot '{slot}': {reason}")]
    MalformedRecord {
        slot: String,
        index: usize,
        reason: String,
    },

    #[error("Unit mismatch for '{ingredient}': tallied in '{expected}', got '{found}'")]
    UnitMismatch {
        ingredient: String,
        expected: String,
        found: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
