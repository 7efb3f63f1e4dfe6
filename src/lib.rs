//! # exprcalc
//!
//! exprcalc is a small arithmetic expression language written in Rust.
//! It parses expressions made of numbers, `+ - * / **`, parentheses and calls
//! to builtin math functions, and evaluates them to a number or a diagnostic.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        evaluator::core::eval_program,
        lexer::Tokenizer,
        object::Object,
        parser::core::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of an expression as a tree. The AST is
/// built by the parser and traversed, read-only, by the evaluator.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Syntax errors are collected by the parser into a list. Runtime errors are
/// carried as values inside `Object::Error`. Neither is ever raised as a
/// panic.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the runtime
/// value representation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and objects.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive shell and one-shot evaluation.
///
/// Reads expressions, runs them through the interpreter and writes the
/// printed form of each result.
pub mod repl;

/// Parses source text into a [`Program`].
///
/// # Errors
/// Returns every syntax error found if the input is malformed. The parser
/// keeps going after an error, so the list may hold more than one entry.
///
/// # Examples
/// ```
/// use exprcalc::parse;
///
/// let program = parse("-2 ** 2").unwrap();
/// assert_eq!(program.to_string(), "((-2) ** 2)");
///
/// let errors = parse("(1 + 2").unwrap_err();
/// assert_eq!(errors[0].to_string(),
///            "expected next token to be ), got EOF instead");
/// ```
pub fn parse(source: &str) -> Result<Program, Vec<ParseError>> {
    let mut parser = Parser::new(Tokenizer::new(source));
    let program = parser.parse_program();
    let errors = parser.into_errors();

    if errors.is_empty() { Ok(program) } else { Err(errors) }
}

/// Returns the final evaluation result of the source text.
///
/// The source is only evaluated if it parsed cleanly. A successful parse of
/// an empty input has no value and yields `Ok(None)`. Runtime failures are
/// not `Err`: they come back as `Ok(Some(Object::Error(..)))`.
///
/// # Errors
/// Returns the syntax errors if parsing fails.
///
/// # Examples
/// ```
/// use exprcalc::{get_result, interpreter::object::Object};
///
/// // Simple expression: the result is calculated.
/// let value = get_result("1 + 2 * 3").unwrap();
/// assert_eq!(value, Some(Object::Number(7.0)));
///
/// // An evaluation failure is still a value.
/// let value = get_result("1 / 0").unwrap().unwrap();
/// assert_eq!(value.to_string(), "ERROR: division by zero");
///
/// // Nothing to evaluate.
/// assert_eq!(get_result("   ").unwrap(), None);
/// ```
pub fn get_result(source: &str) -> Result<Option<Object>, Vec<ParseError>> {
    let program = parse(source)?;
    let result = eval_program(&program);
    log::debug!("evaluated {source:?} to {result:?}");
    Ok(result)
}
