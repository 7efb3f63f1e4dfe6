/// Parser state and the precedence-climbing loop.
///
/// Holds the two-token window over the tokenizer, the precedence table and
/// the accumulated syntax errors, and drives statement and expression
/// parsing.
pub mod core;

/// Prefix handlers.
///
/// Parses everything that can start an expression: numbers, identifiers,
/// unary `+`/`-` and parenthesised groups.
pub mod unary;

/// Infix handlers.
///
/// Parses binary arithmetic operators and call argument lists once a left
/// operand is already known.
pub mod binary;
