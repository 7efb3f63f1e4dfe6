/// The evaluator module walks the syntax tree and computes results.
///
/// The evaluator is stateless: it is a pure function from a tree to a
/// runtime value, consulting only the read-only builtin registry.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves identifiers to builtin functions and applies them.
/// - Reports runtime errors such as division by zero or type mismatches as
///   values.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens: numbers, identifiers, operators and delimiters, followed by an
/// end-of-input marker.
pub mod lexer;
/// The object module defines the runtime values produced by evaluation.
///
/// A value is a number, a reference to a builtin function, or an error.
pub mod object;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a precedence-climbing (Pratt) parser. It never aborts on
/// bad input; instead it collects syntax errors and keeps going.
///
/// # Responsibilities
/// - Converts tokens into AST nodes with the right precedence and
///   associativity.
/// - Records a diagnostic for every construct it cannot parse.
pub mod parser;
