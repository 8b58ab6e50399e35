//! Keys: what the user can press, and how keyboard input maps onto them.

use crate::operation::OperationName;

/// Binary operator buttons on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol shown on the button and in the history line.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// The arithmetic operation this button requests.
    #[must_use]
    pub fn operation(self) -> OperationName {
        match self {
            Self::Add => OperationName::Add,
            Self::Subtract => OperationName::Subtract,
            Self::Multiply => OperationName::Multiply,
            Self::Divide => OperationName::Divide,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A decimal digit, `0..=9`.
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    /// `AC`: reset everything.
    Clear,
    /// `CE`: reset the current entry only.
    ClearEntry,
    ToggleSign,
    Percentage,
    Backspace,
}

impl Key {
    /// Map an on-screen button label to its key.
    #[must_use]
    pub fn from_button(label: &str) -> Option<Self> {
        let key = match label {
            "AC" => Self::Clear,
            "CE" => Self::ClearEntry,
            "%" => Self::Percentage,
            "±" => Self::ToggleSign,
            "." => Self::Decimal,
            "=" => Self::Equals,
            "+" => Self::Operator(Operator::Add),
            "−" => Self::Operator(Operator::Subtract),
            "×" => Self::Operator(Operator::Multiply),
            "÷" => Self::Operator(Operator::Divide),
            _ => return single_digit(label).map(Self::Digit),
        };
        Some(key)
    }
}

/// A key resolved from keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: Key,
    /// Whether the host should suppress its default action for this key
    /// (browsers open quick-find on `/`).
    pub prevent_default: bool,
}

impl KeyBinding {
    /// Map a keyboard key name (as reported by the host) to a key press.
    #[must_use]
    pub fn from_keyboard(name: &str) -> Option<Self> {
        let key = match name {
            "." => Key::Decimal,
            "+" => Key::Operator(Operator::Add),
            "-" => Key::Operator(Operator::Subtract),
            "*" => Key::Operator(Operator::Multiply),
            "/" => {
                return Some(Self {
                    key: Key::Operator(Operator::Divide),
                    prevent_default: true,
                });
            }
            "Enter" | "=" => Key::Equals,
            "Escape" => Key::Clear,
            "Backspace" => Key::Backspace,
            "%" => Key::Percentage,
            _ => Key::Digit(single_digit(name)?),
        };
        Some(Self {
            key,
            prevent_default: false,
        })
    }
}

fn single_digit(text: &str) -> Option<u8> {
    match text.as_bytes() {
        [b @ b'0'..=b'9'] => Some(b - b'0'),
        _ => None,
    }
}
