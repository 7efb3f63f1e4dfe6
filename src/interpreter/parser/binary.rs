use crate::{
    ast::{Expr, InfixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Node, ParseResult, Parser, Precedence},
    },
};

/// Maps a token to its corresponding infix operator.
///
/// Returns `None` for every token that is not a binary arithmetic operator,
/// including `(`, which is handled as a call instead.
///
/// # Example
/// ```
/// use exprcalc::{
///     ast::InfixOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_infix_operator},
/// };
///
/// assert_eq!(token_to_infix_operator(&Token::StarStar),
///            Some(InfixOperator::Pow));
/// assert_eq!(token_to_infix_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_infix_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Add),
        Token::Minus => Some(InfixOperator::Sub),
        Token::Star => Some(InfixOperator::Mul),
        Token::Slash => Some(InfixOperator::Div),
        Token::StarStar => Some(InfixOperator::Pow),
        _ => None,
    }
}

/// Precedence at which the right operand of `op` is parsed.
///
/// Left-associative operators use their own precedence, so an equal operator
/// to the right stops the operand. `**` uses the level just below its own,
/// so `2 ** 3 ** 2` nests as `2 ** (3 ** 2)`.
#[must_use]
pub const fn right_operand_precedence(op: InfixOperator) -> Precedence {
    match op {
        InfixOperator::Add | InfixOperator::Sub => Precedence::Sum,
        InfixOperator::Mul | InfixOperator::Div | InfixOperator::Pow => Precedence::Product,
    }
}

impl Parser<'_> {
    /// Extends `left` with the infix construct at the current token.
    ///
    /// # Errors
    /// `NoInfixParseFn` if the current token is neither `(` nor a binary
    /// operator.
    pub(crate) fn parse_infix(&mut self, left: Node) -> ParseResult<Node> {
        if self.current == Token::LParen {
            return self.parse_call(left);
        }

        match token_to_infix_operator(&self.current) {
            Some(op) => self.parse_binary(left, op),
            None => Err(ParseError::NoInfixParseFn { token: self.current.to_string() }),
        }
    }

    /// Parses the right operand of a binary operator and builds the node.
    ///
    /// The rule is: `infix := expression op expression<right_operand_precedence(op)>`
    fn parse_binary(&mut self, left: Node, op: InfixOperator) -> ParseResult<Node> {
        self.next_token();
        let right = self.parse_node(right_operand_precedence(op))?;
        Node::branch(Expr::Infix { left: Box::new(left.expr),
                                   op,
                                   right: Box::new(right.expr) },
                     left.height.max(right.height))
    }

    /// Parses a call's argument list; the current token is the `(`.
    ///
    /// Grammar: `call := expression "(" (expression ("," expression)*)? ")"`
    fn parse_call(&mut self, function: Node) -> ParseResult<Node> {
        let (arguments, height) = self.parse_call_arguments()?;
        Node::branch(Expr::Call { function: Box::new(function.expr),
                                  arguments },
                     function.height.max(height))
    }

    /// Returns the arguments and the height of the tallest one.
    fn parse_call_arguments(&mut self) -> ParseResult<(Vec<Expr>, usize)> {
        let mut arguments = Vec::new();
        let mut height = 0;

        if self.peek == Token::RParen {
            self.next_token();
            return Ok((arguments, height));
        }

        loop {
            self.next_token();
            let argument = self.parse_node(Precedence::Lowest)?;
            height = height.max(argument.height);
            arguments.push(argument.expr);

            if self.peek != Token::Comma {
                break;
            }
            self.next_token();
        }

        self.expect_peek(&Token::RParen)?;
        Ok((arguments, height))
    }
}
