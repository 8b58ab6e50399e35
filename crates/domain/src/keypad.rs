//! Keypad: the calculator front panel as a reducer.
//!
//! [`KeypadState`] holds the display, the pending operator and the history
//! line. [`KeypadState::press`] applies a [`Key`] and, when the transition
//! needs arithmetic, hands back a [`PendingCall`]. The caller performs the
//! calculation however it likes (in-process or over HTTP) and feeds the
//! outcome to [`KeypadState::resolve`]. No IO happens here.

mod key;
mod state;

pub use key::{Key, KeyBinding, Operator};
pub use state::{ERROR_DISPLAY, KeypadState, PendingCall};
