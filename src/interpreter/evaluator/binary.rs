use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, object::Object},
};

/// Evaluates an infix operation on two already evaluated operands.
///
/// Both operands must have the same runtime type, and only numbers support
/// arithmetic.
///
/// # Errors
/// - `TypeMismatch` if the operand types differ.
/// - `UnknownInfixOperator` if both operands are of a non-numeric type.
/// - `DivisionByZero` for `/` with a zero divisor.
pub fn eval_infix(op: InfixOperator, left: &Object, right: &Object) -> EvalResult<Object> {
    match (left, right) {
        (Object::Number(l), Object::Number(r)) => eval_number_infix(op, *l, *r),
        _ if left.object_type() != right.object_type() => {
            Err(RuntimeError::TypeMismatch { left: left.object_type(),
                                             op,
                                             right: right.object_type() })
        },
        _ => Err(RuntimeError::UnknownInfixOperator { left: left.object_type(),
                                                      op,
                                                      right: right.object_type() }),
    }
}

/// Evaluates a scalar arithmetic operation.
///
/// The divisor is compared to zero by value, so small but nonzero divisors
/// such as `1e-7` divide normally.
///
/// # Example
/// ```
/// use exprcalc::{
///     ast::InfixOperator,
///     error::RuntimeError,
///     interpreter::{evaluator::binary::eval_number_infix, object::Object},
/// };
///
/// let result = eval_number_infix(InfixOperator::Div, 1.0, 0.000_000_1).unwrap();
/// assert_eq!(result, Object::Number(10_000_000.0));
///
/// let err = eval_number_infix(InfixOperator::Div, 1.0, 0.0).unwrap_err();
/// assert_eq!(err, RuntimeError::DivisionByZero);
/// ```
///
/// # Errors
/// `DivisionByZero` if `op` is `/` and `right` is zero.
#[allow(clippy::float_cmp)]
pub fn eval_number_infix(op: InfixOperator, left: f64, right: f64) -> EvalResult<Object> {
    Ok(Object::Number(match op {
                          InfixOperator::Add => left + right,
                          InfixOperator::Sub => left - right,
                          InfixOperator::Mul => left * right,
                          InfixOperator::Div => {
                              if right == 0.0 {
                                  return Err(RuntimeError::DivisionByZero);
                              }
                              left / right
                          },
                          InfixOperator::Pow => left.powf(right),
                      }))
}
