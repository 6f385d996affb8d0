use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown country '{name}'")]
    UnknownCountry { name: String },

    #[error("Invalid distribution '{name}': {reason}")]
    InvalidDistribution { name: &'static str, reason: String },

    #[error("Invalid null probability for '{field}': {value} (must be within 0..=1)")]
    InvalidProbability { field: String, value: f64 },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}

pub type GenResult<T> = Result<T, GenError>;
