//! Expression: restricted arithmetic expression evaluation.
//!
//! Only decimal literals, the four binary operators, prefix signs and
//! parentheses exist in the grammar:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/') unary)*
//! unary  := ('+' | '-') unary | atom
//! atom   := NUMBER | '(' expr ')'
//! ```
//!
//! There are no identifiers, so there is nothing to call or look up.

mod lexer;
mod parser;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, ValidationError};
use crate::number;

pub use lexer::{Spanned, Token, tokenize};
pub use parser::{MAX_DEPTH, parse};

/// Syntax error in an arithmetic expression.
///
/// Positions are byte offsets into the expression after whitespace removal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected character {found:?} at {position}")]
    UnexpectedCharacter { position: usize, found: char },

    #[error("malformed number at {position}")]
    MalformedNumber { position: usize },

    #[error("unexpected {found} at {position}")]
    UnexpectedToken { position: usize, found: Token },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unbalanced parenthesis at {position}")]
    UnbalancedParenthesis { position: usize },

    #[error("expression nested deeper than {MAX_DEPTH} levels")]
    TooDeep,
}

/// Successful outcome of evaluating an expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Finite result rounded to ten decimal places.
    pub result: f64,
    /// The expression exactly as it was supplied.
    pub expression: String,
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '.' | '(' | ')')
}

/// Strip whitespace and reject anything outside `[0-9+\-*/.()]`.
fn sanitize(expression: &str) -> Result<String, ValidationError> {
    let stripped: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() || !stripped.chars().all(is_allowed) {
        return Err(ValidationError::InvalidCharacters);
    }
    Ok(stripped)
}

/// Evaluate a flat arithmetic expression.
///
/// Whitespace is removed before tokenizing, so `"1 2"` reads as `12`.
///
/// # Errors
///
/// Returns [`ValidationError::MissingExpression`] for an empty string,
/// [`ValidationError::InvalidCharacters`] for anything outside the allowed
/// alphabet, [`ValidationError::MalformedExpression`] for syntax errors, and
/// [`crate::error::ArithmeticError::NonFinite`] when the value is infinite or
/// `NaN` (for example `1/0`).
pub fn evaluate(expression: &str) -> Result<Evaluation, CalcError> {
    if expression.is_empty() {
        return Err(ValidationError::MissingExpression.into());
    }
    let sanitized = sanitize(expression)?;
    let value = tokenize(&sanitized)
        .and_then(|tokens| parse(&tokens))
        .map_err(ValidationError::MalformedExpression)?;

    Ok(Evaluation {
        result: number::finalize(value)?,
        expression: expression.to_string(),
    })
}
