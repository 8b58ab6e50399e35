//! Operation: the fixed table of arithmetic operations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One of the arithmetic operations the service knows how to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationName {
    Add,
    Subtract,
    Multiply,
    Divide,
    Percentage,
    Negate,
    Sqrt,
    Power,
}

/// How many operands an operation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

impl OperationName {
    /// Every operation, in the order they are reported to callers.
    pub const ALL: [Self; 8] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Percentage,
        Self::Negate,
        Self::Sqrt,
        Self::Power,
    ];

    /// Wire name of the operation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Percentage => "percentage",
            Self::Negate => "negate",
            Self::Sqrt => "sqrt",
            Self::Power => "power",
        }
    }

    #[must_use]
    pub fn arity(self) -> Arity {
        match self {
            Self::Percentage | Self::Negate | Self::Sqrt => Arity::Unary,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Power => {
                Arity::Binary
            }
        }
    }

    #[must_use]
    pub fn is_unary(self) -> bool {
        self.arity() == Arity::Unary
    }

    /// Wire names of all operations, for error payloads.
    #[must_use]
    pub fn valid_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|op| op.as_str()).collect()
    }
}

impl FromStr for OperationName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownOperation(s.to_string()))
    }
}

impl std::fmt::Display for OperationName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
