//! # calcpad-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** (`POST /api/calculate`, `POST /api/evaluate`)
//!   and the `GET /health` liveness probe
//! - Map HTTP requests into arithmetic port calls (driving adapter)
//! - Map results and errors into HTTP responses (`200` or `400 {error}`)
//! - Apply request tracing and CORS
//!
//! ## Dependency rule
//! Depends on `calcpad-app` (for the port trait) and `calcpad-domain`
//! (for request/response types). Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
