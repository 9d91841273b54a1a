use thiserror::Error;

/// Failures surfaced by parameter parsing, simulation setup and summarising.
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("{field} must be {requirement} (got {value})")]
    InvalidParameter {
        field: &'static str,
        requirement: &'static str,
        value: f64,
    },
    #[error("{field} is not a valid number (got {value:?})")]
    NotNumeric { field: &'static str, value: String },
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
