//! Calculation: validating and performing a single arithmetic operation.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ArithmeticError, CalcError, ValidationError};
use crate::number;
use crate::operand::Operand;
use crate::operation::{Arity, OperationName};

/// Unvalidated calculation request, exactly as a caller sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    #[serde(
        default,
        deserialize_with = "lenient_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub operation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operand1: Option<Operand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operand2: Option<Operand>,
}

impl CalculationRequest {
    /// Request for a two-operand operation.
    #[must_use]
    pub fn binary(operation: OperationName, operand1: f64, operand2: f64) -> Self {
        Self {
            operation: Some(operation.as_str().to_string()),
            operand1: Some(operand1.into()),
            operand2: Some(operand2.into()),
        }
    }

    /// Request for a one-operand operation.
    #[must_use]
    pub fn unary(operation: OperationName, operand1: f64) -> Self {
        Self {
            operation: Some(operation.as_str().to_string()),
            operand1: Some(operand1.into()),
            operand2: None,
        }
    }
}

/// Read `operation` from any JSON value. Non-string values keep their JSON
/// text and so fail later as unknown operations.
fn lenient_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(name)) => Some(name),
        Some(other) => Some(other.to_string()),
    })
}

/// A validated calculation, ready to be performed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub operation: OperationName,
    pub operand1: f64,
    /// Present exactly when `operation` is binary.
    pub operand2: Option<f64>,
}

impl TryFrom<&CalculationRequest> for Calculation {
    type Error = ValidationError;

    fn try_from(req: &CalculationRequest) -> Result<Self, Self::Error> {
        let name = req
            .operation
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(ValidationError::MissingOperation)?;
        let operand1 = req
            .operand1
            .as_ref()
            .ok_or(ValidationError::MissingOperand { field: "operand1" })?
            .parse("operand1")?;
        let operation: OperationName = name.parse()?;

        let operand2 = match operation.arity() {
            Arity::Unary => None,
            Arity::Binary => Some(
                req.operand2
                    .as_ref()
                    .ok_or(ValidationError::MissingSecondOperand)?
                    .parse("operand2")?,
            ),
        };

        Ok(Self {
            operation,
            operand1,
            operand2,
        })
    }
}

impl Calculation {
    /// Perform the operation, check the result is finite, and round it.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`],
    /// [`ArithmeticError::NegativeSquareRoot`], or
    /// [`ArithmeticError::NonFinite`].
    pub fn perform(&self) -> Result<CalculationResult, ArithmeticError> {
        let a = self.operand1;
        let b = self.operand2.unwrap_or_default();
        let raw = match self.operation {
            OperationName::Add => a + b,
            OperationName::Subtract => a - b,
            OperationName::Multiply => a * b,
            OperationName::Divide => {
                if b == 0.0 {
                    return Err(ArithmeticError::DivisionByZero);
                }
                a / b
            }
            OperationName::Percentage => a / 100.0,
            OperationName::Negate => -a,
            OperationName::Sqrt => {
                if a < 0.0 {
                    return Err(ArithmeticError::NegativeSquareRoot);
                }
                a.sqrt()
            }
            OperationName::Power => a.powf(b),
        };

        Ok(CalculationResult {
            result: number::finalize(raw)?,
            operation: self.operation,
            operand1: self.operand1,
            operand2: self.operand2,
        })
    }
}

/// Validate a raw request and perform it.
///
/// # Errors
///
/// Returns [`CalcError::Validation`] for malformed input and
/// [`CalcError::Arithmetic`] for undefined results.
pub fn calculate(req: &CalculationRequest) -> Result<CalculationResult, CalcError> {
    let calculation = Calculation::try_from(req)?;
    Ok(calculation.perform()?)
}

/// Successful outcome of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Finite result rounded to ten decimal places.
    pub result: f64,
    pub operation: OperationName,
    pub operand1: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operand2: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(operation: &str, operand1: Option<Operand>, operand2: Option<Operand>) -> CalculationRequest {
        CalculationRequest {
            operation: Some(operation.to_string()),
            operand1,
            operand2,
        }
    }

    fn result_of(op: OperationName, a: f64, b: f64) -> f64 {
        calculate(&CalculationRequest::binary(op, a, b)).unwrap().result
    }

    #[test]
    fn should_perform_binary_operations() {
        assert_eq!(result_of(OperationName::Add, 7.0, 3.0), 10.0);
        assert_eq!(result_of(OperationName::Subtract, 7.0, 10.0), -3.0);
        assert_eq!(result_of(OperationName::Multiply, 2.5, 4.0), 10.0);
        assert_eq!(result_of(OperationName::Divide, 10.0, 4.0), 2.5);
        assert_eq!(result_of(OperationName::Power, 2.0, 10.0), 1024.0);
    }

    #[test]
    fn should_perform_unary_operations() {
        let pct = calculate(&CalculationRequest::unary(OperationName::Percentage, 50.0)).unwrap();
        assert_eq!(pct.result, 0.5);
        assert_eq!(pct.operand2, None);

        let neg = calculate(&CalculationRequest::unary(OperationName::Negate, 4.0)).unwrap();
        assert_eq!(neg.result, -4.0);

        let root = calculate(&CalculationRequest::unary(OperationName::Sqrt, 16.0)).unwrap();
        assert_eq!(root.result, 4.0);
    }

    #[test]
    fn should_round_results_to_ten_decimal_places() {
        assert_eq!(result_of(OperationName::Divide, 10.0, 3.0), 3.333_333_333_3);
        assert_eq!(result_of(OperationName::Add, 0.1, 0.2), 0.3);
    }

    #[test]
    fn should_fail_on_division_by_zero_for_any_dividend() {
        for a in [0.0, 1.0, -1.0, 1e300, -0.5] {
            let err = calculate(&CalculationRequest::binary(OperationName::Divide, a, 0.0));
            assert_eq!(err, Err(CalcError::Arithmetic(ArithmeticError::DivisionByZero)));
        }
    }

    #[test]
    fn should_fail_on_square_root_of_negative() {
        for a in [-1.0, -0.0001, -1e10] {
            let err = calculate(&CalculationRequest::unary(OperationName::Sqrt, a));
            assert_eq!(
                err,
                Err(CalcError::Arithmetic(ArithmeticError::NegativeSquareRoot))
            );
        }
    }

    #[test]
    fn should_fail_on_overflow() {
        let err = calculate(&CalculationRequest::binary(OperationName::Multiply, 1e200, 1e200));
        assert_eq!(err, Err(CalcError::Arithmetic(ArithmeticError::NonFinite)));

        let err = calculate(&CalculationRequest::binary(OperationName::Power, 10.0, 400.0));
        assert_eq!(err, Err(CalcError::Arithmetic(ArithmeticError::NonFinite)));
    }

    #[test]
    fn should_fail_on_nan_result() {
        let err = calculate(&CalculationRequest::binary(OperationName::Power, -8.0, 0.5));
        assert_eq!(err, Err(CalcError::Arithmetic(ArithmeticError::NonFinite)));
    }

    #[test]
    fn should_require_operation() {
        let req = CalculationRequest {
            operand1: Some(1.0.into()),
            ..CalculationRequest::default()
        };
        assert_eq!(
            calculate(&req),
            Err(CalcError::Validation(ValidationError::MissingOperation))
        );

        let empty = request("", Some(1.0.into()), None);
        assert_eq!(
            calculate(&empty),
            Err(CalcError::Validation(ValidationError::MissingOperation))
        );
    }

    #[test]
    fn should_require_operand1_before_checking_operation_name() {
        let req = request("bogus", None, None);
        assert_eq!(
            calculate(&req),
            Err(CalcError::Validation(ValidationError::MissingOperand {
                field: "operand1"
            }))
        );
    }

    #[test]
    fn should_reject_unknown_operation() {
        let req = request("modulo", Some(1.0.into()), Some(2.0.into()));
        assert_eq!(
            calculate(&req),
            Err(CalcError::Validation(ValidationError::UnknownOperation(
                "modulo".to_string()
            )))
        );
    }

    #[test]
    fn should_require_operand2_for_binary_operations() {
        let req = request("add", Some(1.0.into()), None);
        assert_eq!(
            calculate(&req),
            Err(CalcError::Validation(ValidationError::MissingSecondOperand))
        );
    }

    #[test]
    fn should_ignore_operand2_for_unary_operations() {
        let req = request("negate", Some(3.0.into()), Some("junk".into()));
        let result = calculate(&req).unwrap();
        assert_eq!(result.result, -3.0);
        assert_eq!(result.operand2, None);
    }

    #[test]
    fn should_parse_string_operands() {
        let req = request("multiply", Some("2.5".into()), Some("4".into()));
        let result = calculate(&req).unwrap();
        assert_eq!(result.result, 10.0);
        assert_eq!(result.operand1, 2.5);
        assert_eq!(result.operand2, Some(4.0));
    }

    #[test]
    fn should_reject_non_numeric_operands() {
        let req = request("add", Some("x".into()), Some(1.0.into()));
        assert_eq!(
            calculate(&req),
            Err(CalcError::Validation(ValidationError::NotANumber {
                field: "operand1"
            }))
        );

        let req = request("add", Some(1.0.into()), Some("y".into()));
        assert_eq!(
            calculate(&req),
            Err(CalcError::Validation(ValidationError::NotANumber {
                field: "operand2"
            }))
        );
    }

    #[test]
    fn should_omit_operand2_when_serializing_unary_result() {
        let result = calculate(&CalculationRequest::unary(OperationName::Negate, 2.0)).unwrap();
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"result": -2.0, "operation": "negate", "operand1": 2.0})
        );
    }

    #[test]
    fn should_report_non_string_operation_as_unknown() {
        let req: CalculationRequest =
            serde_json::from_str(r#"{"operation":42,"operand1":1,"operand2":2}"#).unwrap();
        assert_eq!(
            calculate(&req),
            Err(CalcError::Validation(ValidationError::UnknownOperation(
                "42".to_string()
            )))
        );

        let req: CalculationRequest =
            serde_json::from_str(r#"{"operation":null,"operand1":1}"#).unwrap();
        assert_eq!(
            calculate(&req),
            Err(CalcError::Validation(ValidationError::MissingOperation))
        );
    }

    #[test]
    fn should_reject_boolean_operand_as_not_a_number() {
        let req: CalculationRequest =
            serde_json::from_str(r#"{"operation":"add","operand1":true,"operand2":1}"#).unwrap();
        assert_eq!(
            calculate(&req),
            Err(CalcError::Validation(ValidationError::NotANumber {
                field: "operand1"
            }))
        );
    }

    #[test]
    fn should_keep_noise_out_of_large_results() {
        let result = calculate(&CalculationRequest::binary(
            OperationName::Add,
            1_000_000.1,
            0.2,
        ))
        .unwrap();
        assert_eq!(result.result, 1_000_000.3);
    }

    #[test]
    fn should_deserialize_request_with_nulls() {
        let req: CalculationRequest =
            serde_json::from_str(r#"{"operation":"add","operand1":1,"operand2":null}"#).unwrap();
        assert_eq!(req.operand2, None);
        assert_eq!(req.operand1, Some(Operand::Number(1.0)));
    }
}
