use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::eval_infix, builtin, function::eval_call, unary::eval_prefix},
        object::Object,
    },
};

/// Result type used by the evaluator.
///
/// Internal evaluation steps return either a value or the `RuntimeError` that
/// stopped them. At the public boundary the error is folded back into
/// [`Object::Error`].
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates every statement of a program in order.
///
/// Evaluation stops at the first statement that produces an error, and that
/// error is the result. Otherwise the value of the last statement is
/// returned. An empty program has no value.
///
/// # Example
/// ```
/// use exprcalc::{interpreter::evaluator::core::eval_program, parse};
///
/// let program = parse("2 ** 3 ** 2").unwrap();
/// let value = eval_program(&program).unwrap();
///
/// assert_eq!(value.to_string(), "512.00");
/// ```
#[must_use]
pub fn eval_program(program: &Program) -> Option<Object> {
    let mut result = None;

    for statement in &program.statements {
        let value = eval_statement(statement);
        if value.is_error() {
            log::debug!("evaluation stopped: {value}");
            return Some(value);
        }
        result = Some(value);
    }

    result
}

/// Evaluates a single statement.
#[must_use]
pub fn eval_statement(statement: &Statement) -> Object {
    match statement {
        Statement::Expression(expr) => eval_expression(expr),
    }
}

/// Evaluates an expression and returns the resulting value.
///
/// Failures come back as [`Object::Error`].
///
/// # Example
/// ```
/// use exprcalc::{
///     ast::Expr,
///     interpreter::{evaluator::core::eval_expression, object::Object},
/// };
///
/// let expr = Expr::Identifier("foo".to_string());
/// let value = eval_expression(&expr);
///
/// assert!(value.is_error());
/// assert_eq!(value.to_string(), "ERROR: unexpected identifier: foo");
/// ```
#[must_use]
pub fn eval_expression(expr: &Expr) -> Object {
    eval(expr).unwrap_or_else(Object::Error)
}

/// Evaluates an expression, propagating the first error unchanged.
///
/// Operands are evaluated left to right and each one is checked before the
/// operator is applied, so an error deep in the tree surfaces as is.
pub(crate) fn eval(expr: &Expr) -> EvalResult<Object> {
    match expr {
        Expr::Number(value) => Ok(Object::Number(*value)),
        Expr::Identifier(name) => eval_identifier(name),
        Expr::Prefix { op, right } => {
            let operand = eval(right)?;
            eval_prefix(*op, &operand)
        },
        Expr::Infix { left, op, right } => {
            let left = eval(left)?;
            let right = eval(right)?;
            eval_infix(*op, &left, &right)
        },
        Expr::Call { function, arguments } => {
            let function = eval(function)?;
            eval_call(&function, arguments)
        },
    }
}

/// Resolves an identifier against the builtin registry.
fn eval_identifier(name: &str) -> EvalResult<Object> {
    builtin::lookup(name).map(Object::Builtin)
                         .ok_or_else(|| RuntimeError::UnknownIdentifier { name: name.to_string() })
}
