use crate::{
    ast::{Expr, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Node, ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Dispatches on the current token to the matching prefix handler.
    ///
    /// Grammar (simplified):
    /// ```text
    ///     prefix := NUMBER
    ///             | IDENTIFIER
    ///             | ("+" | "-") expression<Prefix>
    ///             | "(" expression ")"
    /// ```
    /// # Errors
    /// - `IllegalToken` if the tokenizer could not recognise the input.
    /// - `NoPrefixParseFn` for any other token that cannot start an
    ///   expression.
    pub(crate) fn parse_prefix(&mut self) -> ParseResult<Node> {
        match &self.current {
            Token::Number(value) => Ok(Node::leaf(Expr::Number(*value))),
            Token::Identifier(name) => Ok(Node::leaf(Expr::Identifier(name.clone()))),
            Token::Plus => self.parse_prefix_operation(PrefixOperator::Plus),
            Token::Minus => self.parse_prefix_operation(PrefixOperator::Minus),
            Token::LParen => self.parse_grouping(),
            Token::Illegal(text) => Err(ParseError::IllegalToken { text: text.clone() }),
            token => Err(ParseError::NoPrefixParseFn { token: token.to_string() }),
        }
    }

    /// Parses a unary `+` or `-`.
    ///
    /// The operand is parsed at [`Precedence::Prefix`], so the operator
    /// captures only what binds tighter than itself: `-2 ** 2` is
    /// `(-2) ** 2`, while `-sqrt(4)` negates the whole call.
    fn parse_prefix_operation(&mut self, op: PrefixOperator) -> ParseResult<Node> {
        self.next_token();
        let right = self.parse_node(Precedence::Prefix)?;
        Node::branch(Expr::Prefix { op,
                                    right: Box::new(right.expr) },
                     right.height)
    }

    /// Parses a parenthesized expression.
    ///
    /// Expected form `( expression )`. The grouping leaves no node of its own
    /// in the tree; it only changes how the inner expression binds.
    fn parse_grouping(&mut self) -> ParseResult<Node> {
        self.next_token();
        let inner = self.parse_node(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;
        Ok(inner)
    }
}
