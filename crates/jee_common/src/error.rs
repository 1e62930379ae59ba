//! Error types for the solver.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Invalid subject. Choose from: physics, chemistry, mathematics")]
    InvalidSubject(String),

    #[error("Error processing question: {0}")]
    Internal(String),

    #[error("Error processing question: formatting failed")]
    Format(#[from] std::fmt::Error),
}

/// Rejected solver configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("confidence bounds must lie in [0, 1], got {min}..={max}")]
    ConfidenceOutOfRange { min: f64, max: f64 },

    #[error("{field}: minimum {min} exceeds maximum {max}")]
    InvertedRange {
        field: &'static str,
        min: String,
        max: String,
    },
}

/// Coarse failure class, used by the transport to pick a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Internal => "internal",
        }
    }
}

impl SolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SolveError::EmptyQuestion | SolveError::InvalidSubject(_) => ErrorKind::Validation,
            SolveError::Internal(_) | SolveError::Format(_) => ErrorKind::Internal,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}
