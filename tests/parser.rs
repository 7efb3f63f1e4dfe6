use exprcalc::{
    ast::{Expr, InfixOperator, PrefixOperator, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, Tokenizer},
        parser::{
            binary::token_to_infix_operator,
            core::{MAX_NESTING, Precedence},
        },
    },
    parse,
};

fn assert_parses_to(src: &str, expected: &str) {
    let program = parse(src).unwrap_or_else(|e| panic!("`{src}` failed to parse: {e:?}"));
    assert_eq!(program.to_string(), expected, "for `{src}`");
}

fn parse_errors(src: &str) -> Vec<String> {
    parse(src).expect_err("input was expected to be rejected")
              .iter()
              .map(ToString::to_string)
              .collect()
}

fn tokens(src: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(src);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next_token();
        if token == Token::Eof {
            return tokens;
        }
        tokens.push(token);
    }
}

#[test]
fn tokenizer_recognises_operators() {
    assert_eq!(tokens("1+2*3**4/5-(6),"),
               vec![Token::Number(1.0),
                    Token::Plus,
                    Token::Number(2.0),
                    Token::Star,
                    Token::Number(3.0),
                    Token::StarStar,
                    Token::Number(4.0),
                    Token::Slash,
                    Token::Number(5.0),
                    Token::Minus,
                    Token::LParen,
                    Token::Number(6.0),
                    Token::RParen,
                    Token::Comma]);
}

#[test]
fn tokenizer_reads_numbers_and_identifiers() {
    assert_eq!(tokens("3.25 .5 1e3 sqrt"),
               vec![Token::Number(3.25),
                    Token::Number(0.5),
                    Token::Number(1000.0),
                    Token::Identifier("sqrt".to_string())]);
}

#[test]
fn separated_stars_are_two_tokens() {
    assert_eq!(tokens("* *"), vec![Token::Star, Token::Star]);
    assert_eq!(tokens("**"), vec![Token::StarStar]);
}

#[test]
fn unknown_characters_become_illegal_tokens() {
    assert_eq!(tokens("1 $ 2"),
               vec![Token::Number(1.0), Token::Illegal("$".to_string()), Token::Number(2.0)]);
}

#[test]
fn tokenizer_is_exhausted_after_eof() {
    let mut tokenizer = Tokenizer::new("1");
    assert_eq!(tokenizer.next_token(), Token::Number(1.0));
    assert_eq!(tokenizer.next_token(), Token::Eof);
    assert_eq!(tokenizer.next_token(), Token::Eof);
}

#[test]
fn operator_precedence() {
    assert_parses_to("1 + 2 * 3", "(1 + (2 * 3))");
    assert_parses_to("1 * 2 + 3", "((1 * 2) + 3)");
    assert_parses_to("1 - 2 - 3", "((1 - 2) - 3)");
    assert_parses_to("1 / 2 / 3", "((1 / 2) / 3)");
    assert_parses_to("2 * 3 ** 2", "(2 * (3 ** 2))");
    assert_parses_to("(1 + 2) * 3", "((1 + 2) * 3)");
}

#[test]
fn exponent_nests_to_the_right() {
    assert_parses_to("2 ** 3 ** 2", "(2 ** (3 ** 2))");
    assert_parses_to("(2 ** 3) ** 2", "((2 ** 3) ** 2)");
}

#[test]
fn prefix_operators() {
    assert_parses_to("-2 ** 2", "((-2) ** 2)");
    assert_parses_to("-sqrt(4)", "(-sqrt(4))");
    assert_parses_to("--1", "(-(-1))");
    assert_parses_to("+1 - -1", "((+1) - (-1))");
    assert_parses_to("2 ** -1", "(2 ** (-1))");
}

#[test]
fn calls() {
    assert_parses_to("pow(2, 3 + 1)", "pow(2, (3 + 1))");
    assert_parses_to("abs()", "abs()");
    assert_parses_to("sqrt(sqrt(16)) * 2", "(sqrt(sqrt(16)) * 2)");
    assert_parses_to("2(3)", "2(3)");
}

#[test]
fn call_node_shape() {
    let program = parse("pow(1, -2)").unwrap();
    let expected = Expr::Call { function:  Box::new(Expr::Identifier("pow".to_string())),
                                arguments: vec![Expr::Number(1.0),
                                                Expr::Prefix { op:    PrefixOperator::Minus,
                                                               right: Box::new(Expr::Number(2.0)), }], };
    assert_eq!(program.statements, vec![Statement::Expression(expected)]);
}

#[test]
fn infix_node_shape() {
    let program = parse("1 ** 2").unwrap();
    let expected = Expr::Infix { left:  Box::new(Expr::Number(1.0)),
                                 op:    InfixOperator::Pow,
                                 right: Box::new(Expr::Number(2.0)), };
    assert_eq!(program.statements, vec![Statement::Expression(expected)]);
}

#[test]
fn several_statements() {
    let program = parse("1 2 + 3").unwrap();
    assert_eq!(program.statements.len(), 2);
    assert_eq!(program.to_string(), "1(2 + 3)");
}

#[test]
fn empty_input_is_an_empty_program() {
    assert!(parse("").unwrap().statements.is_empty());
    assert!(parse("\n\t ").unwrap().statements.is_empty());
}

#[test]
fn unclosed_group() {
    assert_eq!(parse_errors("(1 + 2"),
               vec!["expected next token to be ), got EOF instead"]);
}

#[test]
fn missing_operand() {
    assert_eq!(parse_errors("1 +"), vec!["no prefix parse function for EOF found"]);
    assert_eq!(parse_errors("2 * * 3"), vec!["no prefix parse function for * found"]);
    assert_eq!(parse_errors(")"), vec!["no prefix parse function for ) found"]);
}

#[test]
fn malformed_argument_lists() {
    assert_eq!(parse_errors("pow(1,)"), vec!["no prefix parse function for ) found"]);
    assert_eq!(parse_errors("sqrt(1 2)"),
               vec!["expected next token to be ), got 2 instead",
                    "no prefix parse function for ) found"]);
}

#[test]
fn illegal_token() {
    let errors = parse("1 $ 2").unwrap_err();
    assert_eq!(errors, vec![ParseError::IllegalToken { text: "$".to_string() }]);
    assert_eq!(errors[0].to_string(), "illegal token $");
}

#[test]
fn every_infix_token_has_an_infix_rule() {
    let candidates = [Token::Number(1.0),
                      Token::Identifier("x".to_string()),
                      Token::Plus,
                      Token::Minus,
                      Token::Star,
                      Token::StarStar,
                      Token::Slash,
                      Token::LParen,
                      Token::RParen,
                      Token::Comma,
                      Token::Illegal("$".to_string()),
                      Token::Eof];

    for token in candidates {
        if Precedence::of(&token) > Precedence::Lowest {
            assert!(token == Token::LParen || token_to_infix_operator(&token).is_some(),
                    "{token} continues an expression but has no infix rule");
        }
    }
}

fn assert_too_deep(src: &str) {
    let errors = parse(src).expect_err("deeply nested input was accepted");
    assert!(errors.contains(&ParseError::NestingTooDeep { limit: MAX_NESTING }),
            "expected a nesting error, got {:?}",
            errors.first());
}

#[test]
fn deeply_nested_input_is_a_syntax_error() {
    assert_too_deep(&("-".repeat(100_000) + "1"));
    assert_too_deep(&"(".repeat(100_000));
    assert_too_deep(&format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000)));
    assert_too_deep(&format!("{}1{}", "abs(".repeat(100_000), ")".repeat(100_000)));
    assert_too_deep(&("2 ** ".repeat(100_000) + "2"));
}

#[test]
fn long_left_associative_chain_is_bounded() {
    assert_too_deep(&("1 + ".repeat(100_000) + "1"));
    assert_too_deep(&("8 / ".repeat(100_000) + "1"));
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let depth = MAX_NESTING - 1;
    let src = format!("{}1", "-".repeat(depth));
    assert!(parse(&src).is_ok());

    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_parses_to(&src, "1");

    assert_eq!(ParseError::NestingTooDeep { limit: MAX_NESTING }.to_string(),
               format!("expression nested too deeply. limit={MAX_NESTING}"));
}
