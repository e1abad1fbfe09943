use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutriError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Lookup error: {0}")]
    Lookup(String),

    #[error("Reference table unreachable ({attempted} lookups failed, last error: {last_error})")]
    LookupUnavailable { attempted: usize, last_error: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl NutriError {
    /// Whether an interactive session can report this and ask again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, NutriError::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, NutriError>;
