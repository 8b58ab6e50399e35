//! Operand: a numeric input that may arrive as a number or as text.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Raw operand value as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Number(f64),
    Text(String),
    /// Any other JSON value (`true`, `[]`, `{}`); never a number.
    Other(serde_json::Value),
}

impl Operand {
    /// Interpret the operand as a floating-point number.
    ///
    /// Text is trimmed before parsing. `NaN` and infinities are never valid
    /// operands.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotANumber`] naming `field` when the value
    /// cannot be read as a number.
    pub fn parse(&self, field: &'static str) -> Result<f64, ValidationError> {
        let value = match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
            Self::Other(_) => None,
        };
        value
            .filter(|v| v.is_finite())
            .ok_or(ValidationError::NotANumber { field })
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
