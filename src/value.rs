// Chain
//
// Data transformation by successive calls, like pipes.
//
// Licensed under the MIT License.

// src/value.rs
// Dynamic values threaded through a chain

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::ChainError;
use crate::eval::seq::LazySeq;

// ============================================================================
// Core Types
// ============================================================================

/// A dynamically typed value flowing through a chain.
///
/// Every step of a chain consumes and produces a `Value`. The `Lazy` variant
/// holds a not-yet-consumed sequence produced by a lazy-sequence step; it is
/// materialized by a later step such as `ops::list`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Unit,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Lazy(LazySeq),
}

/// The kind of a [`Value`], used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Unit,
    Bool,
    Int,
    Float,
    Str,
    List,
    Map,
    Lazy,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ValueKind::Unit => "unit",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Str => "str",
            ValueKind::List => "list",
            ValueKind::Map => "map",
            ValueKind::Lazy => "lazy",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// Helper Methods
// ============================================================================

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Unit => ValueKind::Unit,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::List(_) => ValueKind::List,
            Value::Map(_) => ValueKind::Map,
            Value::Lazy(_) => ValueKind::Lazy,
        }
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }

    pub fn as_bool(&self) -> Result<bool, ChainError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(ChainError::Kind {
                expected: ValueKind::Bool,
                got: other.kind(),
            }),
        }
    }

    pub fn as_int(&self) -> Result<i64, ChainError> {
        match self {
            Value::Int(n) => Ok(*n),
            other => Err(ChainError::Kind {
                expected: ValueKind::Int,
                got: other.kind(),
            }),
        }
    }

    /// Numeric accessor; ints coerce to floats.
    pub fn as_float(&self) -> Result<f64, ChainError> {
        match self {
            Value::Float(x) => Ok(*x),
            Value::Int(n) => Ok(*n as f64),
            other => Err(ChainError::Kind {
                expected: ValueKind::Float,
                got: other.kind(),
            }),
        }
    }

    pub fn as_str(&self) -> Result<&str, ChainError> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(ChainError::Kind {
                expected: ValueKind::Str,
                got: other.kind(),
            }),
        }
    }

    pub fn as_list(&self) -> Result<&[Value], ChainError> {
        match self {
            Value::List(items) => Ok(items),
            other => Err(ChainError::Kind {
                expected: ValueKind::List,
                got: other.kind(),
            }),
        }
    }

    pub fn as_map(&self) -> Result<&BTreeMap<String, Value>, ChainError> {
        match self {
            Value::Map(entries) => Ok(entries),
            other => Err(ChainError::Kind {
                expected: ValueKind::Map,
                got: other.kind(),
            }),
        }
    }

    /// Break an iterable value into its items: a string yields its characters,
    /// a list its elements, a map its keys, and a lazy sequence is forced.
    pub fn into_items(self) -> Result<Vec<Value>, ChainError> {
        match self {
            Value::Str(s) => Ok(s.chars().map(Value::from).collect()),
            Value::List(items) => Ok(items),
            Value::Map(entries) => Ok(entries.into_keys().map(Value::Str).collect()),
            Value::Lazy(lazy) => lazy.force(),
            other => Err(ChainError::NotIterable { kind: other.kind() }),
        }
    }

    /// Ordering between values of comparable kinds. Ints and floats compare
    /// numerically with each other; strings compare lexicographically.
    pub fn compare(&self, other: &Value) -> Result<Ordering, ChainError> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
            (Value::Str(a), Value::Str(b)) => Ok(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Ok(a.cmp(b)),
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                let a = self.as_float()?;
                let b = other.as_float()?;
                a.partial_cmp(&b).ok_or(ChainError::NotComparable {
                    left: self.kind(),
                    right: other.kind(),
                })
            }
            (left, right) => Err(ChainError::NotComparable {
                left: left.kind(),
                right: right.kind(),
            }),
        }
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl Value {
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    pub fn float(x: f64) -> Self {
        Value::Float(x)
    }

    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect())
    }

    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Unit
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Str(c.to_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::Map(entries)
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Lazy(_) => write!(f, "<lazy sequence>"),
        }
    }
}
