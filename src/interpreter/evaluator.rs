/// Core evaluation logic.
///
/// Dispatches on the syntax tree, evaluates programs and statements, resolves
/// identifiers, and converts between the value and `Result` error channels.
pub mod core;

/// Prefix operator evaluation.
///
/// Handles unary `+` and `-` on numbers.
pub mod unary;

/// Infix operator evaluation.
///
/// Implements the arithmetic operators, including the division-by-zero
/// check, and the type rules for mixed operands.
pub mod binary;

/// Call evaluation.
///
/// Evaluates argument lists and applies builtin functions.
pub mod function;

/// The builtin function registry.
///
/// A static, read-only table of named numeric functions with fixed arity.
pub mod builtin;
