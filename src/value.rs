//! Rendering of call arguments of unknown shape.

use std::fmt;

/// A dynamically shaped argument captured in a stack frame.
///
/// The variant set is closed on purpose: whatever a host cannot express with
/// the tags below lands in `Unknown` and renders as a placeholder instead of
/// failing.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Ordered key/value pairs. Insertion order is preserved verbatim.
    Array(Vec<(Value, Value)>),
    /// Opaque reference, rendered by type name only.
    Object(String),
    /// Opaque handle, rendered by resource type name only.
    Resource(String),
    Unknown,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(text) => {
                f.write_str("\"")?;
                for c in text.chars() {
                    match c {
                        '\u{0}' => f.write_str("\\0")?,
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        '\u{1a}' => f.write_str("\\Z")?,
                        '\t' => f.write_str("\\t")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                f.write_str("\"")
            }
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(true) => f.write_str("true"),
            Value::Bool(false) => f.write_str("false"),
            Value::Array(pairs) => {
                f.write_str("array( ")?;
                for (i, (key, val)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} => {}", key, val)?;
                }
                f.write_str(" )")
            }
            Value::Object(type_name) => write!(f, "Object {}", type_name),
            Value::Resource(type_name) => write!(f, "Resource {}", type_name),
            Value::Unknown => f.write_str("Unknown type variable"),
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::Str(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Value {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Value {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Bool(v)
    }
}
