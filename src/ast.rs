use std::fmt;

/// The root of a parsed source line.
///
/// A program is an ordered list of statements. In practice a line holds one
/// expression statement, but consecutive expressions (`1 2`) each become a
/// statement of their own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// A single statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression evaluated for its value.
    Expression(Expr),
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Nodes own their children, so the tree has no sharing and no cycles. Once
/// the parser hands a tree out it is only ever read.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// A name referring to a builtin function.
    Identifier(String),
    /// A unary operation such as `-x`.
    Prefix {
        /// The operator to apply.
        op:    PrefixOperator,
        /// The operand expression.
        right: Box<Self>,
    },
    /// A binary operation such as `a * b`.
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A function application such as `pow(2, 10)`.
    Call {
        /// The expression producing the function, usually an identifier.
        function:  Box<Self>,
        /// Arguments in source order.
        arguments: Vec<Self>,
    },
}

/// Operators that can appear in prefix position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Unary plus (`+`), the identity.
    Plus,
    /// Negation (`-`).
    Minus,
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
    /// Exponentiation (`**`), right-associative.
    Pow,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Plus => "+",
            Self::Minus => "-",
        };
        f.write_str(symbol)
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
        };
        f.write_str(symbol)
    }
}

/// Renders the expression with every operation wrapped in parentheses, which
/// makes the parsed precedence visible.
///
/// ## Example
/// ```
/// use exprcalc::parse;
///
/// let program = parse("1 + 2 * 3").unwrap();
/// assert_eq!(program.to_string(), "(1 + (2 * 3))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Identifier(name) => f.write_str(name),
            Self::Prefix { op, right } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::Call { function, arguments } => {
                let arguments = arguments.iter()
                                         .map(ToString::to_string)
                                         .collect::<Vec<_>>()
                                         .join(", ");
                write!(f, "{function}({arguments})")
            },
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
