//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod calculate;
#[allow(clippy::missing_errors_doc)]
pub mod evaluate;

use axum::Router;
use axum::routing::post;

use calcpad_app::ports::Arithmetic;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<A>() -> Router<AppState<A>>
where
    A: Arithmetic + Send + Sync + 'static,
{
    Router::new()
        .route("/calculate", post(calculate::calculate::<A>))
        .route("/evaluate", post(evaluate::evaluate::<A>))
}
