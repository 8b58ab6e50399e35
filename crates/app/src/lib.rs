//! # calcpad-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`Arithmetic` port** that arithmetic providers implement
//!   (in-process service, remote HTTP client, test stubs)
//! - Provide the **`CalculatorService`** use-case: validate, calculate,
//!   evaluate expressions, and log outcomes
//! - Provide the **`KeypadSession`** use-case: drive the keypad reducer against
//!   any `Arithmetic` port, one call at a time
//!
//! ## Dependency rule
//! Depends on `calcpad-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
