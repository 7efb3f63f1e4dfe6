use thiserror::Error;

use crate::{
    ast::{InfixOperator, PrefixOperator},
    interpreter::object::ObjectType,
};

/// Represents all errors that can occur during evaluation.
///
/// A `RuntimeError` is never thrown; it is wrapped in `Object::Error` and
/// handed back to the caller like any other value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// An identifier that names no builtin function.
    #[error("unexpected identifier: {name}")]
    UnknownIdentifier {
        /// The identifier as written.
        name: String,
    },
    /// A prefix operator applied to an operand it does not support.
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator {
        /// The operator.
        op:      PrefixOperator,
        /// Runtime type of the operand.
        operand: ObjectType,
    },
    /// An infix operator applied to two operands of the same, unsupported,
    /// type.
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        /// Runtime type of the left operand.
        left:  ObjectType,
        /// The operator.
        op:    InfixOperator,
        /// Runtime type of the right operand.
        right: ObjectType,
    },
    /// An infix operator applied to operands of different types.
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        /// Runtime type of the left operand.
        left:  ObjectType,
        /// The operator.
        op:    InfixOperator,
        /// Runtime type of the right operand.
        right: ObjectType,
    },
    /// Attempted division by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A builtin received the wrong number of arguments.
    #[error("{name} accepts {expected} {}. got={found}", argument_noun(.expected))]
    ArgumentCountMismatch {
        /// Name of the builtin.
        name:     &'static str,
        /// Number of arguments the builtin takes.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
    },
    /// A builtin received something other than numbers.
    #[error("{name} only accepts numbers. got={}", join_types(.found))]
    ExpectedNumber {
        /// Name of the builtin.
        name:  &'static str,
        /// Runtime types of every supplied argument.
        found: Vec<ObjectType>,
    },
    /// The target of a call expression is not a builtin function.
    #[error("not callable: {found}")]
    NotCallable {
        /// Runtime type of the call target.
        found: ObjectType,
    },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn argument_noun(count: &usize) -> &'static str {
    if *count == 1 { "argument" } else { "arguments" }
}

fn join_types(types: &[ObjectType]) -> String {
    types.iter()
         .map(ToString::to_string)
         .collect::<Vec<_>>()
         .join(" and ")
}
