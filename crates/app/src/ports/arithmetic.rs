//! Arithmetic port: something that can perform calculations.

use std::future::Future;

use calcpad_domain::calculation::{CalculationRequest, CalculationResult};
use calcpad_domain::error::CalcError;
use calcpad_domain::expression::Evaluation;

/// Performs calculations and evaluates expressions.
///
/// Implemented in-process by
/// [`CalculatorService`](crate::services::calculator_service::CalculatorService)
/// and over HTTP by the client adapter.
pub trait Arithmetic {
    /// Validate and perform a single operation.
    fn calculate(
        &self,
        request: CalculationRequest,
    ) -> impl Future<Output = Result<CalculationResult, CalcError>> + Send;

    /// Evaluate a flat arithmetic expression.
    fn evaluate(
        &self,
        expression: String,
    ) -> impl Future<Output = Result<Evaluation, CalcError>> + Send;
}
