// Errors and warnings raised while converting an opti problem

use crate::domain::DomainError;
use std::fmt;

/// Error types for the converter
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Unrecognized kind '{kind}' of parameter '{name}'")]
    UnrecognizedKind { name: String, kind: String },

    #[error("Unrecognized objective kind '{kind}' for output '{name}'")]
    UnrecognizedObjectiveKind { name: String, kind: String },

    #[error("Unrecognized constraint kind '{kind}'")]
    UnrecognizedConstraintKind { kind: String },

    #[error("Cannot apply {objective} {origin} to output '{name}': {reason}")]
    InvalidObjectiveForKind {
        name: String,
        objective: String,
        origin: &'static str,
        reason: String,
    },

    #[error("Output '{name}' is referenced by {count} objectives, only one is allowed")]
    MultipleObjectives { name: String, count: usize },

    #[error("Invalid domain: {0}")]
    InvalidDomain(#[from] DomainError),

    #[error("Invalid opti problem: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;

/// Non-fatal finding of a conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionWarning {
    /// BoFire has no discrete output, the output became continuous
    DiscreteOutputCoerced { name: String },
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionWarning::DiscreteOutputCoerced { name } => {
                write!(f, "{} has been converted to a continuous output", name)
            }
        }
    }
}

/// Result of a successful conversion and the warnings it produced
#[derive(Debug, Clone, PartialEq)]
pub struct Converted<T> {
    pub value: T,
    pub warnings: Vec<ConversionWarning>,
}

impl<T> Converted<T> {
    pub fn new(value: T, warnings: Vec<ConversionWarning>) -> Self {
        Self { value, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}
