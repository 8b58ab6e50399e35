//! `Arithmetic` port implementation over HTTP.

use std::future::Future;

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use calcpad_app::ports::Arithmetic;
use calcpad_domain::calculation::{CalculationRequest, CalculationResult};
use calcpad_domain::error::CalcError;
use calcpad_domain::expression::Evaluation;

use crate::error::ClientError;

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct EvaluateBody<'a> {
    expression: &'a str,
}

/// Arithmetic performed by a remote calcpad server.
#[derive(Debug, Clone)]
pub struct RemoteArithmetic {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteArithmetic {
    /// Wrap an existing client. A trailing `/` on `base_url` is dropped.
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether the server answers its liveness probe.
    pub async fn health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(err) => {
                tracing::debug!(url, error = %err, "health probe failed");
                false
            }
        }
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(url, "calling remote arithmetic");
        let resp = self.client.post(&url).json(body).send().await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {status}"),
    };
    Err(ClientError::Rejected {
        status: status.as_u16(),
        message,
    })
}

impl Arithmetic for RemoteArithmetic {
    fn calculate(
        &self,
        request: CalculationRequest,
    ) -> impl Future<Output = Result<CalculationResult, CalcError>> + Send {
        async move {
            self.post("/api/calculate", &request)
                .await
                .map_err(CalcError::from)
        }
    }

    fn evaluate(
        &self,
        expression: String,
    ) -> impl Future<Output = Result<Evaluation, CalcError>> + Send {
        async move {
            self.post(
                "/api/evaluate",
                &EvaluateBody {
                    expression: &expression,
                },
            )
            .await
            .map_err(CalcError::from)
        }
    }
}
