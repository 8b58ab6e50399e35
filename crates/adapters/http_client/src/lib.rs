//! # calcpad-adapter-http-client
//!
//! Remote arithmetic adapter using [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the `Arithmetic` port defined in `calcpad-app::ports` by calling
//!   `POST /api/calculate` and `POST /api/evaluate` on a calcpad server
//! - Probe `GET /health`
//! - Map non-2xx responses (`{error}` bodies) and transport failures into
//!   `CalcError::Remote`
//!
//! ## Dependency rule
//! Depends on `calcpad-app` (for the port trait) and `calcpad-domain` (for
//! request/response types). The `app` and `domain` crates must never
//! reference this adapter.

pub mod client;
pub mod config;
pub mod error;

pub use client::RemoteArithmetic;
pub use config::Config;
pub use error::ClientError;
