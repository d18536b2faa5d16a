use crate::ast::LiteralValue;

/// Represents a runtime value in the interpreter.
///
/// The value set is closed: every expression evaluates to exactly one of
/// these four cases. There is no array, function or error case at runtime;
/// illegal operand combinations are encoded as [`Value::Nil`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent value. `Nil` doubles as the sequencing sentinel: a block
    /// or loop keeps running while its statements yield `Nil`.
    Nil,
    /// A boolean value (`true` or `false`). Produced by comparison and
    /// logical operators; `if`, `while` and `repeat` conditions must
    /// evaluate to exactly `Bool(true)` to take their branch.
    Bool(bool),
    /// A numeric value (double-precision floating-point).
    Number(f64),
    /// A string value.
    String(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl Value {
    /// Returns `true` if the value is [`Nil`].
    ///
    /// # Example
    /// ```
    /// use genscript::interpreter::value::Value;
    ///
    /// assert!(Value::Nil.is_nil());
    /// assert!(!Value::Number(0.0).is_nil());
    /// ```
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns `true` if the value is exactly `Bool(true)`.
    ///
    /// This is the only condition under which `if`, `while` and `repeat`
    /// take their branch; no other value is treated as truthy.
    #[must_use]
    pub const fn is_true(&self) -> bool {
        matches!(self, Self::Bool(true))
    }

    /// Returns the inner `f64` if the value is a [`Number`].
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the inner `bool` if the value is a [`Bool`].
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the inner string if the value is a [`String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Number(n) => (*n).into(),
            LiteralValue::String(s) => Self::String(s.clone()),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Nil => Self::Nil,
        }
    }
}
