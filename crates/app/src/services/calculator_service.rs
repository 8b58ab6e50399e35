//! Calculator service: use-cases for calculations and expression evaluation.

use std::future::Future;

use calcpad_domain::calculation::{self, CalculationRequest, CalculationResult};
use calcpad_domain::error::CalcError;
use calcpad_domain::expression::{self, Evaluation};

use crate::ports::Arithmetic;

/// Stateless application service performing arithmetic in-process.
///
/// Every request is handled independently; a failure never affects the next
/// request.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorService;

impl CalculatorService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate and perform a single operation.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::Validation`] for missing, non-numeric or unknown
    /// input and [`CalcError::Arithmetic`] for undefined or non-finite
    /// results.
    pub fn perform(&self, request: &CalculationRequest) -> Result<CalculationResult, CalcError> {
        match calculation::calculate(request) {
            Ok(result) => {
                tracing::info!(
                    operation = %result.operation,
                    operand1 = result.operand1,
                    operand2 = ?result.operand2,
                    result = result.result,
                    "calculated"
                );
                Ok(result)
            }
            Err(err) => {
                tracing::warn!(
                    operation = ?request.operation,
                    error = %err,
                    "calculation rejected"
                );
                Err(err)
            }
        }
    }

    /// Evaluate a flat arithmetic expression.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::Validation`] for empty, disallowed or malformed
    /// expressions and [`CalcError::Arithmetic`] for non-finite results.
    pub fn evaluate_expression(&self, expression: &str) -> Result<Evaluation, CalcError> {
        match expression::evaluate(expression) {
            Ok(evaluation) => {
                tracing::info!(
                    expression = %evaluation.expression,
                    result = evaluation.result,
                    "evaluated"
                );
                Ok(evaluation)
            }
            Err(err) => {
                tracing::warn!(expression, error = %err, "evaluation rejected");
                Err(err)
            }
        }
    }
}

impl Arithmetic for CalculatorService {
    fn calculate(
        &self,
        request: CalculationRequest,
    ) -> impl Future<Output = Result<CalculationResult, CalcError>> + Send {
        let outcome = self.perform(&request);
        async { outcome }
    }

    fn evaluate(
        &self,
        expression: String,
    ) -> impl Future<Output = Result<Evaluation, CalcError>> + Send {
        let outcome = self.evaluate_expression(&expression);
        async { outcome }
    }
}
