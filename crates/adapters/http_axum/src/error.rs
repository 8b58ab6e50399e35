//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use calcpad_domain::error::CalcError;
use calcpad_domain::operation::OperationName;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(rename = "validOperations", skip_serializing_if = "Option::is_none")]
    valid_operations: Option<Vec<&'static str>>,
}

/// Maps [`CalcError`] and body rejections to an HTTP response.
pub enum ApiError {
    Calc(CalcError),
    Body(JsonRejection),
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        Self::Calc(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Calc(err) => {
                let valid_operations = err
                    .lists_valid_operations()
                    .then(OperationName::valid_names);
                let status = match &err {
                    CalcError::Validation(_) | CalcError::Arithmetic(_) => StatusCode::BAD_REQUEST,
                    CalcError::Remote(err) => {
                        tracing::error!(error = %err, "upstream arithmetic error");
                        StatusCode::BAD_GATEWAY
                    }
                };
                (
                    status,
                    ErrorBody {
                        error: err.to_string(),
                        valid_operations,
                    },
                )
            }
            Self::Body(rejection) => {
                tracing::debug!(error = %rejection, "rejected request body");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        error: rejection.body_text(),
                        valid_operations: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
