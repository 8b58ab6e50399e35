//! JSON handler for single operations.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};

use calcpad_app::ports::Arithmetic;
use calcpad_domain::calculation::{CalculationRequest, CalculationResult};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the calculate endpoint.
pub enum CalculateResponse {
    Ok(Json<CalculationResult>),
}

impl IntoResponse for CalculateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/calculate`
pub async fn calculate<A>(
    State(state): State<AppState<A>>,
    body: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<CalculateResponse, ApiError>
where
    A: Arithmetic + Send + Sync + 'static,
{
    let Json(req) = body?;
    let result = state.calculator.calculate(req).await?;
    Ok(CalculateResponse::Ok(Json(result)))
}
