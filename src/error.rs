//! Error types for the basics demo programs

use thiserror::Error;

/// Main error type for the demo library
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DemoError {
    #[error("Division by zero: dividend {dividend} has no quotient")]
    DivisionByZero { dividend: i32 },

    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        field: String,
    },

    #[error("Output error: {message}")]
    Output { message: String },
}

impl From<std::io::Error> for DemoError {
    fn from(err: std::io::Error) -> Self {
        DemoError::Output {
            message: err.to_string(),
        }
    }
}

/// Type alias for the main result type used throughout the library
pub type DemoResult<T> = Result<T, DemoError>;
