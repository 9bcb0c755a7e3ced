//! Literal values, comparison operands, and patterns carried by descriptors.

use std::fmt;

use regex::Regex;

use crate::error::BuildError;
use crate::ident::Ident;

/// A literal a descriptor compares against.
///
/// # Example
///
/// ```rust
/// use tideline::Value;
///
/// assert_eq!(Value::from(3), Value::Int(3));
/// assert_eq!(Value::from("draft"), Value::Str("draft".to_string()));
/// assert_eq!(Value::symbol("closed"), Value::Symbol("closed".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence of a value.
    Nil,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
    /// A symbolic constant such as an enum member name.
    Symbol(String),
    /// A list of values.
    List(Vec<Value>),
}

impl Value {
    /// Build a symbolic constant.
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Symbol(s) => write!(f, ":{}", s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

/// One side of a comparison bound: a literal or another field.
///
/// # Example
///
/// ```rust
/// use tideline::{Ident, Operand, Value};
///
/// assert_eq!(Operand::from(10), Operand::Literal(Value::Int(10)));
///
/// let start = Operand::field("starts_at").unwrap();
/// assert_eq!(start, Operand::Field(Ident::new("starts_at").unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operand {
    /// Compare against a literal.
    Literal(Value),
    /// Compare against the current value of another field.
    Field(Ident),
}

impl Operand {
    /// Reference another field by name.
    pub fn field(name: impl Into<String>) -> Result<Self, BuildError> {
        Ident::parse("operand", "field", name).map(Operand::Field)
    }
}

impl<T: Into<Value>> From<T> for Operand {
    fn from(value: T) -> Self {
        Operand::Literal(value.into())
    }
}

impl From<Ident> for Operand {
    fn from(ident: Ident) -> Self {
        Operand::Field(ident)
    }
}

/// A compiled regular expression that remembers its source text.
///
/// Two patterns are equal when their source text is equal.
///
/// # Example
///
/// ```rust
/// use tideline::Pattern;
///
/// let p = Pattern::new(r"^\d{5}$").unwrap();
/// assert_eq!(p.as_str(), r"^\d{5}$");
/// assert!(p.regex().is_match("90210"));
/// assert!(Pattern::new("(").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile `source`.
    pub fn new(source: &str) -> Result<Self, BuildError> {
        Self::parse("pattern", "source", source)
    }

    /// Compile `source`, attributing any error to `builder`'s `argument`.
    pub fn parse(
        builder: &'static str,
        argument: &'static str,
        source: &str,
    ) -> Result<Self, BuildError> {
        Regex::new(source).map(Self::from).map_err(|err| {
            BuildError::InvalidPattern {
                builder,
                argument,
                pattern: source.to_string(),
                reason: err.to_string(),
            }
            .logged()
        })
    }

    /// The source text.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// The compiled expression.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Pattern { regex }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}
