//! Keypad state and its transitions.

use crate::calculation::CalculationRequest;
use crate::error::{CalcError, ValidationError};
use crate::number::format_number;
use crate::operation::OperationName;

use super::key::{Key, Operator};

/// Display text shown after a failed binary calculation.
pub const ERROR_DISPLAY: &str = "Error";

/// Everything the keypad shows and remembers between presses.
#[derive(Debug, Clone, PartialEq)]
pub struct KeypadState {
    /// Current entry: digits, at most one `.`, optional leading `-`.
    pub display: String,
    /// Left operand of the pending operator.
    pub previous_value: Option<f64>,
    pub pending_operator: Option<Operator>,
    /// The next digit starts a fresh entry instead of appending.
    pub waiting_for_operand: bool,
    pub history: String,
    /// A calculation is in flight; key presses are ignored.
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for KeypadState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            pending_operator: None,
            waiting_for_operand: false,
            history: String::new(),
            is_loading: false,
            error: None,
        }
    }
}

/// What to do with the outcome of a calculation a transition asked for.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Continuation {
    /// An operator was pressed while another one was pending.
    Chain { next: Operator },
    /// `=` resolved the pending operator.
    Equals {
        previous: f64,
        operator: Operator,
        current: f64,
    },
    /// `±` or `%` on the current entry.
    Unary,
}

/// A calculation requested by a transition, to be resolved with
/// [`KeypadState::resolve`].
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a pending call leaves the keypad loading until it is resolved or abandoned"]
pub struct PendingCall {
    pub request: CalculationRequest,
    continuation: Continuation,
}

impl KeypadState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the display holds the error indicator instead of a number.
    #[must_use]
    pub fn shows_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// Numeric value of the current entry.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoDisplayValue`] when the display holds the
    /// error indicator.
    pub fn display_value(&self) -> Result<f64, ValidationError> {
        self.display
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or(ValidationError::NoDisplayValue)
    }

    /// Apply a key press.
    ///
    /// Returns the calculation the transition needs, if any. The keypad stays
    /// loading, and ignores further presses, until that call is passed to
    /// [`resolve`](Self::resolve) or [`abandon`](Self::abandon).
    pub fn press(&mut self, key: Key) -> Option<PendingCall> {
        if self.is_loading {
            return None;
        }
        match key {
            Key::Digit(digit) => {
                self.press_digit(digit);
                None
            }
            Key::Decimal => {
                self.press_decimal();
                None
            }
            Key::Operator(operator) => self.press_operator(operator),
            Key::Equals => self.press_equals(),
            Key::Clear => {
                *self = Self::default();
                None
            }
            Key::ClearEntry => {
                self.display = "0".to_string();
                self.error = None;
                None
            }
            Key::ToggleSign => self.press_unary(OperationName::Negate),
            Key::Percentage => self.press_unary(OperationName::Percentage),
            Key::Backspace => {
                self.press_backspace();
                None
            }
        }
    }

    /// Apply the outcome of a call returned by [`press`](Self::press) and
    /// release the loading flag.
    pub fn resolve(&mut self, call: PendingCall, outcome: Result<f64, CalcError>) {
        self.is_loading = false;
        match (call.continuation, outcome) {
            (Continuation::Chain { next }, outcome) => {
                match outcome {
                    Ok(result) => {
                        self.display = format_number(result);
                        self.previous_value = Some(result);
                        self.history = format!("{} {next}", format_number(result));
                    }
                    Err(err) => self.fail_with_indicator(&err),
                }
                self.waiting_for_operand = true;
                self.pending_operator = Some(next);
            }
            (
                Continuation::Equals {
                    previous,
                    operator,
                    current,
                },
                Ok(result),
            ) => {
                self.history = format!(
                    "{} {operator} {} =",
                    format_number(previous),
                    format_number(current)
                );
                self.display = format_number(result);
                self.previous_value = None;
                self.pending_operator = None;
                self.waiting_for_operand = true;
            }
            (Continuation::Equals { .. }, Err(err)) => self.fail_with_indicator(&err),
            (Continuation::Unary, Ok(result)) => self.display = format_number(result),
            (Continuation::Unary, Err(err)) => self.error = Some(err.to_string()),
        }
    }

    /// Drop an in-flight call without applying any outcome.
    pub fn abandon(&mut self, _call: PendingCall) {
        self.is_loading = false;
    }

    fn fail_with_indicator(&mut self, err: &CalcError) {
        self.error = Some(err.to_string());
        self.display = ERROR_DISPLAY.to_string();
    }

    fn take_display_value(&mut self) -> Option<f64> {
        match self.display_value() {
            Ok(value) => Some(value),
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    fn begin(&mut self, request: CalculationRequest, continuation: Continuation) -> PendingCall {
        self.is_loading = true;
        PendingCall {
            request,
            continuation,
        }
    }

    fn press_digit(&mut self, digit: u8) {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        self.error = None;
        if self.waiting_for_operand || self.shows_error() {
            self.display = c.to_string();
            self.waiting_for_operand = false;
        } else if self.display == "0" {
            self.display = c.to_string();
        } else {
            self.display.push(c);
        }
    }

    fn press_decimal(&mut self) {
        self.error = None;
        if self.waiting_for_operand || self.shows_error() {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn press_operator(&mut self, next: Operator) -> Option<PendingCall> {
        self.error = None;
        match (self.previous_value, self.pending_operator) {
            (None, _) => {
                let value = self.take_display_value()?;
                self.previous_value = Some(value);
                self.history = format!("{} {next}", format_number(value));
            }
            (Some(previous), Some(pending)) if !self.waiting_for_operand => {
                let current = self.take_display_value()?;
                let request = CalculationRequest::binary(pending.operation(), previous, current);
                return Some(self.begin(request, Continuation::Chain { next }));
            }
            (Some(previous), _) => {
                self.history = format!("{} {next}", format_number(previous));
            }
        }
        self.waiting_for_operand = true;
        self.pending_operator = Some(next);
        None
    }

    fn press_equals(&mut self) -> Option<PendingCall> {
        let (Some(previous), Some(operator)) = (self.previous_value, self.pending_operator) else {
            return None;
        };
        if self.waiting_for_operand {
            return None;
        }
        self.error = None;
        let current = self.take_display_value()?;
        let request = CalculationRequest::binary(operator.operation(), previous, current);
        Some(self.begin(
            request,
            Continuation::Equals {
                previous,
                operator,
                current,
            },
        ))
    }

    fn press_unary(&mut self, operation: OperationName) -> Option<PendingCall> {
        self.error = None;
        let value = self.take_display_value()?;
        Some(self.begin(
            CalculationRequest::unary(operation, value),
            Continuation::Unary,
        ))
    }

    fn press_backspace(&mut self) {
        self.error = None;
        let len = self.display.chars().count();
        if self.shows_error() || len <= 1 || (len == 2 && self.display.starts_with('-')) {
            self.display = "0".to_string();
        } else {
            self.display.pop();
        }
    }
}
