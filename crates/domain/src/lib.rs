//! # calcpad-domain
//!
//! Pure domain model for the calcpad calculator.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, number rounding and formatting
//! - Define **Operations** (the fixed `add`, `subtract`, … table)
//! - Define **Calculations** (raw requests, validated calculations, results)
//! - Evaluate **Expressions** (restricted `+ - * / ( )` grammar, no identifiers)
//! - Model the **Keypad** (display, pending operator, history) as a reducer
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod number;

pub mod calculation;
pub mod expression;
pub mod keypad;
pub mod operand;
pub mod operation;
