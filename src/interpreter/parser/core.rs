use std::mem;

use crate::{
    ast::{Expr, Program, Statement},
    error::ParseError,
    interpreter::lexer::{Token, Tokenizer},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum nesting depth of an expression.
///
/// Both the parser's own recursion and the height of the tree it builds are
/// bounded by this value, so evaluating, printing or dropping a parsed tree
/// never recurses deeper than it either.
pub const MAX_NESTING: usize = 256;

/// A parsed expression together with the height of its tree.
pub(crate) struct Node {
    pub(crate) expr:   Expr,
    pub(crate) height: usize,
}

impl Node {
    pub(crate) const fn leaf(expr: Expr) -> Self {
        Self { expr, height: 1 }
    }

    /// Wraps `expr` whose tallest child has height `child_height`.
    pub(crate) fn branch(expr: Expr, child_height: usize) -> ParseResult<Self> {
        let height = child_height + 1;
        if height > MAX_NESTING {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING });
        }
        Ok(Self { expr, height })
    }
}

/// Binding power of an operator, from loosest to tightest.
///
/// The derived ordering is the precedence table:
/// `Lowest < Sum < Product < Exponent < Prefix < Call`.
///
/// # Example
/// ```
/// use exprcalc::interpreter::{lexer::Token, parser::core::Precedence};
///
/// assert!(Precedence::of(&Token::Plus) < Precedence::of(&Token::Star));
/// assert!(Precedence::Exponent < Precedence::Prefix);
/// assert_eq!(Precedence::of(&Token::Comma), Precedence::Lowest);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Anything that does not continue an expression.
    Lowest,
    /// `+` and `-`.
    Sum,
    /// `*` and `/`.
    Product,
    /// `**`.
    Exponent,
    /// Unary `+` and `-`.
    Prefix,
    /// Function application, `f(...)`.
    Call,
}

impl Precedence {
    /// Returns the binding power of `token` in infix position.
    #[must_use]
    pub const fn of(token: &Token) -> Self {
        match token {
            Token::Plus | Token::Minus => Self::Sum,
            Token::Star | Token::Slash => Self::Product,
            Token::StarStar => Self::Exponent,
            Token::LParen => Self::Call,
            _ => Self::Lowest,
        }
    }
}

/// A Pratt parser over a [`Tokenizer`].
///
/// The parser keeps the current token and one token of lookahead. Syntax
/// errors do not stop it: each one is recorded, the statement it occurred in
/// is dropped, and parsing resumes with the next token.
///
/// # Example
/// ```
/// use exprcalc::interpreter::{lexer::Tokenizer, parser::core::Parser};
///
/// let mut parser = Parser::new(Tokenizer::new("(1 + 2"));
/// let program = parser.parse_program();
///
/// assert!(program.statements.is_empty());
/// assert_eq!(parser.errors().len(), 1);
/// ```
pub struct Parser<'source> {
    tokenizer:          Tokenizer<'source>,
    pub(crate) current: Token,
    pub(crate) peek:    Token,
    errors:             Vec<ParseError>,
    depth:              usize,
}

impl<'source> Parser<'source> {
    /// Creates a parser and fills the two-token window.
    #[must_use]
    pub fn new(mut tokenizer: Tokenizer<'source>) -> Self {
        let current = tokenizer.next_token();
        let peek = tokenizer.next_token();
        Self { tokenizer,
               current,
               peek,
               errors: Vec::new(),
               depth: 0 }
    }

    /// Syntax errors collected so far.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser and returns its syntax errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parses expression statements until the end of input.
    ///
    /// Statements that fail to parse are left out of the returned
    /// [`Program`]; their diagnostics are available from
    /// [`errors`](Self::errors). Callers must check that list before
    /// evaluating.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while self.current != Token::Eof {
            match self.parse_expression_statement() {
                Ok(statement) => statements.push(statement),
                Err(e) => {
                    log::debug!("syntax error: {e}");
                    self.errors.push(e);
                },
            }
            self.next_token();
        }

        let program = Program { statements };
        log::debug!("parsed program {program}");
        program
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// The current token selects a prefix handler; then, as long as the
    /// lookahead is an operator binding tighter than `precedence`, the
    /// parser advances onto it and lets the infix handler extend the left
    /// operand.
    ///
    /// # Errors
    /// Any syntax error, including `NestingTooDeep` once the expression
    /// nests more than [`MAX_NESTING`] levels.
    pub fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expr> {
        self.parse_node(precedence).map(|node| node.expr)
    }

    /// Runs the Pratt loop one nesting level deeper.
    pub(crate) fn parse_node(&mut self, precedence: Precedence) -> ParseResult<Node> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING });
        }

        self.depth += 1;
        let result = self.parse_pratt(precedence);
        self.depth -= 1;
        result
    }

    fn parse_pratt(&mut self, precedence: Precedence) -> ParseResult<Node> {
        let mut left = self.parse_prefix()?;

        while precedence < Precedence::of(&self.peek) {
            self.next_token();
            left = self.parse_infix(left)?;
        }

        Ok(left)
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        Ok(Statement::Expression(expr))
    }

    /// Shifts the window one token forward.
    pub(crate) fn next_token(&mut self) {
        let next = self.tokenizer.next_token();
        self.current = mem::replace(&mut self.peek, next);
    }

    /// Advances if the lookahead has the same kind as `expected`, otherwise
    /// reports what was found instead and leaves the window untouched.
    pub(crate) fn expect_peek(&mut self, expected: &Token) -> ParseResult<()> {
        if mem::discriminant(&self.peek) == mem::discriminant(expected) {
            self.next_token();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                              found:    self.peek.to_string(), })
        }
    }
}
