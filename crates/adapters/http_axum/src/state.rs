//! Shared application state for axum handlers.

use std::sync::Arc;

use calcpad_app::ports::Arithmetic;

/// Application state shared across all axum handlers.
///
/// Generic over the arithmetic implementation to avoid dynamic dispatch.
/// `Clone` is implemented manually so `A` itself does not need to be
/// `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<A> {
    /// Arithmetic provider backing the API.
    pub calculator: Arc<A>,
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            calculator: Arc::clone(&self.calculator),
        }
    }
}

impl<A> AppState<A>
where
    A: Arithmetic + Send + Sync + 'static,
{
    /// Create a new application state from an arithmetic provider.
    pub fn new(calculator: A) -> Self {
        Self {
            calculator: Arc::new(calculator),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc`.
    ///
    /// Use this when the provider is shared with something else.
    pub fn from_arc(calculator: Arc<A>) -> Self {
        Self { calculator }
    }
}
