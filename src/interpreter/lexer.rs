use std::fmt;

use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens; builtin function names such as `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `**`
    #[token("**")]
    StarStar,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Characters the lexer does not recognise.
    Illegal(String),
    /// End of input.
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => f.write_str(name),
            Self::Illegal(text) => f.write_str(text),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::StarStar => f.write_str("**"),
            Self::Slash => f.write_str("/"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Comma => f.write_str(","),
            Self::Eof => f.write_str("EOF"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Turns source text into a stream of [`Token`]s, one at a time.
///
/// Unrecognised input becomes [`Token::Illegal`] instead of an error, and
/// once the source is exhausted every further call yields [`Token::Eof`].
///
/// # Example
/// ```
/// use exprcalc::interpreter::lexer::{Token, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new("2 ** x");
///
/// assert_eq!(tokenizer.next_token(), Token::Number(2.0));
/// assert_eq!(tokenizer.next_token(), Token::StarStar);
/// assert_eq!(tokenizer.next_token(), Token::Identifier("x".to_string()));
/// assert_eq!(tokenizer.next_token(), Token::Eof);
/// assert_eq!(tokenizer.next_token(), Token::Eof);
/// ```
pub struct Tokenizer<'source> {
    lexer: logos::Lexer<'source, Token>,
}

impl<'source> Tokenizer<'source> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { lexer: Token::lexer(source) }
    }

    /// Advances past the next token and returns it.
    pub fn next_token(&mut self) -> Token {
        let token = match self.lexer.next() {
            Some(Ok(token)) => token,
            Some(Err(())) => Token::Illegal(self.lexer.slice().to_string()),
            None => Token::Eof,
        };
        log::trace!("token {token:?}");
        token
    }
}
