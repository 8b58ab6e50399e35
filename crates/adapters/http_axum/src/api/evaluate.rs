//! JSON handler for expression evaluation.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use calcpad_app::ports::Arithmetic;
use calcpad_domain::error::{CalcError, ValidationError};
use calcpad_domain::expression::Evaluation;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for evaluating an expression.
///
/// `expression` is kept loosely typed so that a missing, `null` or
/// non-string value gets the same "required" error.
#[derive(Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub expression: Option<serde_json::Value>,
}

/// Possible responses from the evaluate endpoint.
pub enum EvaluateResponse {
    Ok(Json<Evaluation>),
}

impl IntoResponse for EvaluateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/evaluate`
pub async fn evaluate<A>(
    State(state): State<AppState<A>>,
    body: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<EvaluateResponse, ApiError>
where
    A: Arithmetic + Send + Sync + 'static,
{
    let Json(req) = body?;
    let Some(serde_json::Value::String(expression)) = req.expression else {
        return Err(CalcError::from(ValidationError::MissingExpression).into());
    };
    let evaluation = state.calculator.evaluate(expression).await?;
    Ok(EvaluateResponse::Ok(Json(evaluation)))
}
