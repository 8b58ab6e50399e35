//! Common error types used across the workspace.
//!
//! Each failure family is its own enum and converts into [`CalcError`]
//! via `#[from]`.

use crate::expression::ParseError;

/// Top-level error returned by calculations and expression evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl CalcError {
    /// Whether the caller should be shown the list of valid operation names.
    #[must_use]
    pub fn lists_valid_operations(&self) -> bool {
        matches!(
            self,
            Self::Validation(
                ValidationError::MissingOperation | ValidationError::UnknownOperation(_)
            )
        )
    }
}

/// Malformed, missing, or unknown input. Always correctable by the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Operation is required")]
    MissingOperation,

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("{field} is required")]
    MissingOperand { field: &'static str },

    #[error("operand2 is required for this operation")]
    MissingSecondOperand,

    #[error("{field} must be a valid number")]
    NotANumber { field: &'static str },

    #[error("Expression string is required")]
    MissingExpression,

    #[error("Invalid characters in expression")]
    InvalidCharacters,

    #[error("Invalid expression")]
    MalformedExpression(#[source] ParseError),

    #[error("Display does not hold a number")]
    NoDisplayValue,
}

/// Mathematically undefined or non-representable result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Cannot calculate square root of negative number")]
    NegativeSquareRoot,

    #[error("Result is not a finite number")]
    NonFinite,
}

/// Failure talking to a remote arithmetic service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RemoteError {
    pub message: String,
}

impl RemoteError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
