use std::fmt;

use crate::{error::RuntimeError, interpreter::evaluator::builtin::Builtin};

/// Represents a runtime value produced by the evaluator.
///
/// Every evaluation step yields exactly one `Object`. Failures are ordinary
/// values too: an [`Object::Error`] is returned, never thrown, and every
/// consumer has to look at it before using a result as data.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A reference to an entry of the builtin registry.
    Builtin(&'static Builtin),
    /// A failed evaluation, carrying the reason.
    Error(RuntimeError),
}

/// The runtime type of an [`Object`], as shown in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    /// `NUMBER`
    Number,
    /// `BUILTIN`
    Builtin,
    /// `ERROR`
    Error,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "NUMBER",
            Self::Builtin => "BUILTIN",
            Self::Error => "ERROR",
        };
        f.write_str(name)
    }
}

impl From<f64> for Object {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<RuntimeError> for Object {
    fn from(e: RuntimeError) -> Self {
        Self::Error(e)
    }
}

impl Object {
    /// Returns the runtime type of the value.
    ///
    /// # Example
    /// ```
    /// use exprcalc::interpreter::object::{Object, ObjectType};
    ///
    /// assert_eq!(Object::Number(1.0).object_type(), ObjectType::Number);
    /// assert_eq!(Object::Number(1.0).object_type().to_string(), "NUMBER");
    /// ```
    #[must_use]
    pub const fn object_type(&self) -> ObjectType {
        match self {
            Self::Number(_) => ObjectType::Number,
            Self::Builtin(_) => ObjectType::Builtin,
            Self::Error(_) => ObjectType::Error,
        }
    }

    /// Returns `true` if the value is an [`Object::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Splits the error channel out of the value.
    ///
    /// `Object::Error` becomes `Err`; every other value is returned as `Ok`
    /// unchanged. This is how the evaluator propagates an error with `?`
    /// without inspecting or rewriting it.
    ///
    /// # Errors
    /// Returns the carried [`RuntimeError`] if the value is an error.
    pub fn into_result(self) -> Result<Self, RuntimeError> {
        match self {
            Self::Error(e) => Err(e),
            value => Ok(value),
        }
    }
}

/// Formats the value the way the shell prints it.
///
/// Numbers always show two decimals in fixed-point notation.
///
/// # Example
/// ```
/// use exprcalc::{error::RuntimeError, interpreter::object::Object};
///
/// assert_eq!(Object::Number(7.0).to_string(), "7.00");
/// assert_eq!(Object::Number(1e21).to_string(), "1000000000000000000000.00");
/// assert_eq!(Object::Error(RuntimeError::DivisionByZero).to_string(),
///            "ERROR: division by zero");
/// ```
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n:.2}"),
            Self::Builtin(_) => f.write_str("Builtin Function"),
            Self::Error(e) => write!(f, "ERROR: {e}"),
        }
    }
}
