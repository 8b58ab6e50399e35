//! Number helpers shared by calculations, expressions and the keypad.

use crate::error::ArithmeticError;

/// Number of decimal places kept in every result.
pub const DECIMAL_PLACES: i32 = 10;

const SCALE: f64 = 1e10;

/// Beyond this magnitude every `f64` is already an integer.
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Magnitudes at or above this are rendered with an exponent.
const EXPONENT_ABOVE: f64 = 1e21;

/// Non-zero magnitudes below this are rendered with an exponent.
const EXPONENT_BELOW: f64 = 1e-6;

/// Reject infinities and `NaN`.
///
/// # Errors
///
/// Returns [`ArithmeticError::NonFinite`] when `value` is not finite.
pub fn ensure_finite(value: f64) -> Result<f64, ArithmeticError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ArithmeticError::NonFinite)
    }
}

/// Round to [`DECIMAL_PLACES`] decimal places, halves rounding toward +∞.
///
/// Suppresses binary floating-point noise such as `0.1 + 0.2`. Negative zero
/// comes back as positive zero.
#[must_use]
pub fn round_result(value: f64) -> f64 {
    let scaled = value * SCALE;
    let rounded = if !scaled.is_finite() {
        value
    } else if scaled.abs() >= INTEGRAL_THRESHOLD {
        scaled / SCALE
    } else {
        (scaled + 0.5).floor() / SCALE
    };
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Check finiteness, then round.
///
/// # Errors
///
/// Returns [`ArithmeticError::NonFinite`] when `value` is not finite.
pub fn finalize(value: f64) -> Result<f64, ArithmeticError> {
    ensure_finite(value).map(round_result)
}

/// Render a number the way the keypad shows it: shortest round-tripping
/// form, `-0` shown as `0`.
///
/// Very large and very small magnitudes use exponent notation with an
/// explicit sign (`1e+300`, `1e-7`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }
    value.to_string()
}
