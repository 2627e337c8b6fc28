use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeatingError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    /// A seating that is not a bijection between seats and agents.
    #[error("Invalid Arrangement: {0}")]
    InvalidArrangement(String),
}

pub type SfResult<T> = Result<T, SeatingError>;
