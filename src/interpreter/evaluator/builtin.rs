use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, object::Object},
};

/// Signature of a builtin taking one number.
pub type UnaryFn = fn(f64) -> f64;
/// Signature of a builtin taking two numbers.
pub type BinaryFn = fn(f64, f64) -> f64;

/// The numeric function behind a builtin, tagged by arity.
#[derive(Debug, Clone, Copy)]
pub enum BuiltinFn {
    /// Takes exactly one number.
    Unary(UnaryFn),
    /// Takes exactly two numbers.
    Binary(BinaryFn),
}

/// An entry of the builtin registry.
///
/// Entries live in a `static` table that is never written, so references to
/// them are `'static` and can be stored in [`Object::Builtin`] freely.
#[derive(Debug)]
pub struct Builtin {
    name: &'static str,
    func: BuiltinFn,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name and the arity-tagged function pointer.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $kind:ident($func:expr)
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, func: BuiltinFn::$kind($func) },
            )*
        ];
        /// Names of every builtin function, in registry order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "cos"  => Unary(f64::cos),
    "acos" => Unary(f64::acos),
    "sin"  => Unary(f64::sin),
    "asin" => Unary(f64::asin),
    "tan"  => Unary(f64::tan),
    "atan" => Unary(f64::atan),
    "exp"  => Unary(f64::exp),
    "log"  => Unary(f64::ln),
    "abs"  => Unary(f64::abs),
    "sqrt" => Unary(f64::sqrt),
    "pow"  => Binary(f64::powf),
}

/// Looks a builtin up by name.
///
/// # Example
/// ```
/// use exprcalc::interpreter::evaluator::builtin::lookup;
///
/// assert_eq!(lookup("sqrt").map(|b| b.arity()), Some(1));
/// assert_eq!(lookup("pow").map(|b| b.arity()), Some(2));
/// assert!(lookup("foo").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Builtin {
    /// The name the builtin is registered under.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Number of arguments the builtin accepts.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self.func {
            BuiltinFn::Unary(_) => 1,
            BuiltinFn::Binary(_) => 2,
        }
    }

    /// Applies the builtin to already evaluated arguments.
    ///
    /// The builtin validates its own input: a wrong argument count or a
    /// non-numeric argument yields an [`Object::Error`] instead of a number.
    ///
    /// # Example
    /// ```
    /// use exprcalc::interpreter::{evaluator::builtin::lookup, object::Object};
    ///
    /// let pow = lookup("pow").unwrap();
    /// assert_eq!(pow.call(&[Object::Number(2.0), Object::Number(10.0)]),
    ///            Object::Number(1024.0));
    ///
    /// let sqrt = lookup("sqrt").unwrap();
    /// let err = sqrt.call(&[Object::Number(1.0), Object::Number(2.0)]);
    /// assert_eq!(err.to_string(), "ERROR: sqrt accepts 1 argument. got=2");
    /// ```
    #[must_use]
    pub fn call(&self, args: &[Object]) -> Object {
        self.apply(args).unwrap_or_else(Object::Error)
    }

    fn apply(&self, args: &[Object]) -> EvalResult<Object> {
        if args.len() != self.arity() {
            return Err(RuntimeError::ArgumentCountMismatch { name:     self.name,
                                                             expected: self.arity(),
                                                             found:    args.len(), });
        }

        let numbers = self.numeric_arguments(args)?;

        let result = match self.func {
            BuiltinFn::Unary(f) => f(numbers[0]),
            BuiltinFn::Binary(f) => f(numbers[0], numbers[1]),
        };
        Ok(Object::Number(result))
    }

    fn numeric_arguments(&self, args: &[Object]) -> EvalResult<Vec<f64>> {
        args.iter()
            .map(|arg| match arg {
                Object::Number(n) => Some(*n),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| RuntimeError::ExpectedNumber { name:  self.name,
                                                          found: args.iter()
                                                                     .map(Object::object_type)
                                                                     .collect(), })
    }
}
