//! Operand values.
//!
//! The [`Value`] enum is the typed payload of a leaf expression. Parsed
//! parameters produce it through the coercion engine; the fluent builder
//! accepts anything that converts into it.

use chrono::{DateTime, Utc};

/// Typed operand of a leaf expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicit null (`null` / `nil` in parameters).
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Point in time, normalized to UTC.
    Timestamp(DateTime<Utc>),
    /// String value.
    String(String),
    /// Homogeneous list of values.
    List(List),
}

impl Value {
    /// Returns `true` if this is a `Null` value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this is a `List` value.
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the integer value, if present.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the float value, if present.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the timestamp value, if present.
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// Extracts the list value, if present.
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }
}

/// Ordered list whose elements all share one type.
#[derive(Debug, Clone, PartialEq)]
pub enum List {
    Bool(Vec<bool>),
    Int(Vec<i64>),
    Float(Vec<f64>),
    Timestamp(Vec<DateTime<Utc>>),
    String(Vec<String>),
}

impl List {
    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            List::Bool(v) => v.len(),
            List::Int(v) => v.len(),
            List::Float(v) => v.len(),
            List::Timestamp(v) => v.len(),
            List::String(v) => v.len(),
        }
    }

    /// Returns `true` if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the elements as individual values.
    pub fn values(&self) -> Vec<Value> {
        match self {
            List::Bool(v) => v.iter().copied().map(Value::Bool).collect(),
            List::Int(v) => v.iter().copied().map(Value::Int).collect(),
            List::Float(v) => v.iter().copied().map(Value::Float).collect(),
            List::Timestamp(v) => v.iter().copied().map(Value::Timestamp).collect(),
            List::String(v) => v.iter().cloned().map(Value::String).collect(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::Timestamp(t)
    }
}

impl From<List> for Value {
    fn from(l: List) -> Self {
        Value::List(l)
    }
}

impl From<Vec<bool>> for List {
    fn from(v: Vec<bool>) -> Self {
        List::Bool(v)
    }
}

impl From<Vec<i64>> for List {
    fn from(v: Vec<i64>) -> Self {
        List::Int(v)
    }
}

impl From<Vec<i32>> for List {
    fn from(v: Vec<i32>) -> Self {
        List::Int(v.into_iter().map(i64::from).collect())
    }
}

impl From<Vec<f64>> for List {
    fn from(v: Vec<f64>) -> Self {
        List::Float(v)
    }
}

impl From<Vec<DateTime<Utc>>> for List {
    fn from(v: Vec<DateTime<Utc>>) -> Self {
        List::Timestamp(v)
    }
}

impl From<Vec<String>> for List {
    fn from(v: Vec<String>) -> Self {
        List::String(v)
    }
}

impl From<Vec<&str>> for List {
    fn from(v: Vec<&str>) -> Self {
        List::String(v.into_iter().map(str::to_string).collect())
    }
}
