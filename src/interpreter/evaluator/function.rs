use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, eval},
        object::Object,
    },
};

/// Evaluates a call once its target has been evaluated.
///
/// Arguments are evaluated in order and the first error among them is
/// returned without applying the function. The target must be a builtin.
///
/// # Errors
/// - Any error raised by an argument.
/// - `NotCallable` if `function` is not a builtin.
/// - Whatever the builtin reports for bad arity or argument types.
pub fn eval_call(function: &Object, arguments: &[Expr]) -> EvalResult<Object> {
    let args = arguments.iter().map(eval).collect::<EvalResult<Vec<_>>>()?;

    match function {
        Object::Builtin(builtin) => {
            log::trace!("calling {} with {} argument(s)", builtin.name(), args.len());
            builtin.call(&args).into_result()
        },
        other => Err(RuntimeError::NotCallable { found: other.object_type() }),
    }
}
