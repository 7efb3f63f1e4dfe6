/// Parsing errors.
///
/// Defines the syntax diagnostics that the parser accumulates while it walks
/// the token stream. A non-empty list of these means the syntax tree is
/// incomplete and must not be evaluated.
pub mod parse_error;
/// Runtime errors.
///
/// Contains every failure the evaluator can produce: unknown identifiers,
/// unsupported operators, type mismatches, division by zero and builtin
/// arity or type violations. They travel inside `Object::Error`.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
