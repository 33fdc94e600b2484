//! Error type shared by the harness and the CLI.
//!
//! The numeric kernels themselves never fail; everything here comes from
//! argument parsing, benchmark selection, verification or CSV output.

/// Errors that can occur while configuring or running benchmarks.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Missing value for option {0}")]
    MissingValue(String),

    #[error("Invalid value '{value}' for option {option}")]
    InvalidValue { option: String, value: String },

    #[error("No benchmark matches '{filter}'. Available: {}", available.join(", "))]
    NoMatch {
        filter: String,
        available: Vec<&'static str>,
    },

    #[error("Algorithm '{algorithm}' failed verification: {message}")]
    Verification { algorithm: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BenchError {
    /// Shorthand for a verification failure.
    pub fn verification(algorithm: &str, message: impl Into<String>) -> Self {
        Self::Verification {
            algorithm: algorithm.to_string(),
            message: message.into(),
        }
    }

    /// Shorthand for an unparsable option value.
    pub fn invalid_value(option: &str, value: &str) -> Self {
        Self::InvalidValue {
            option: option.to_string(),
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
