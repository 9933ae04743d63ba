//! Error types for the league convergence engine

use crate::structure::Position;
use thiserror::Error;

/// Main error type for the league convergence engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvergenceError {
    #[error("Invalid position: division {division}, league {league} ({reason})")]
    InvalidPosition {
        division: u32,
        league: u32,
        reason: String,
    },

    #[error("No convergence for {team_a} and {team_b} within {limit} seasons")]
    ConvergenceNotFound {
        team_a: Position,
        team_b: Position,
        limit: u32,
    },

    #[error("Invalid league structure: {0}")]
    InvalidStructure(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<serde_json::Error> for ConvergenceError {
    fn from(err: serde_json::Error) -> Self {
        ConvergenceError::DeserializationError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<ConvergenceError> for pyo3::PyErr {
    fn from(err: ConvergenceError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyRuntimeError, PyValueError};

        match err {
            ConvergenceError::ConvergenceNotFound { .. } => {
                PyRuntimeError::new_err(err.to_string())
            }
            ConvergenceError::InvalidPosition { .. }
            | ConvergenceError::InvalidStructure(_)
            | ConvergenceError::DeserializationError(_)
            | ConvergenceError::ParseError(_) => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Result type alias for the league convergence engine
pub type Result<T> = std::result::Result<T, ConvergenceError>;
