use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, object::Object},
};

/// Evaluates a prefix operation on an already evaluated operand.
///
/// Only numbers support `+` and `-`; `+x` is the identity and `-x` negates.
///
/// # Example
/// ```
/// use exprcalc::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::unary::eval_prefix, object::Object},
/// };
///
/// let v = eval_prefix(PrefixOperator::Minus, &Object::Number(5.0)).unwrap();
/// assert_eq!(v, Object::Number(-5.0));
/// ```
///
/// # Errors
/// `UnknownPrefixOperator` if the operand is not a number.
pub fn eval_prefix(op: PrefixOperator, operand: &Object) -> EvalResult<Object> {
    let Object::Number(value) = operand else {
        return Err(RuntimeError::UnknownPrefixOperator { op,
                                                         operand: operand.object_type() });
    };

    Ok(Object::Number(match op {
                          PrefixOperator::Plus => *value,
                          PrefixOperator::Minus => -value,
                      }))
}
