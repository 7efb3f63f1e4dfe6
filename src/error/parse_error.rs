use thiserror::Error;

/// Represents a syntax error found while parsing.
///
/// The parser never stops at the first problem; it records one of these per
/// failed construct and carries on with the rest of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token appeared where an expression had to start.
    #[error("no prefix parse function for {token} found")]
    NoPrefixParseFn {
        /// Source text of the offending token.
        token: String,
    },
    /// The token after the current one was not the one the grammar requires.
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        /// The token the grammar asked for.
        expected: String,
        /// The token actually found.
        found:    String,
    },
    /// The tokenizer could not recognise a run of characters.
    #[error("illegal token {text}")]
    IllegalToken {
        /// The unrecognised characters.
        text: String,
    },
    /// A token in operator position that no infix rule accepts.
    #[error("no infix parse function for {token} found")]
    NoInfixParseFn {
        /// Source text of the offending token.
        token: String,
    },
    /// The expression nests deeper than the parser allows.
    #[error("expression nested too deeply. limit={limit}")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
    },
}
