//! Structured value types returned by shell commands.
//!
//! Commands return `Value` instead of printing directly; the front end
//! decides how to render it (plain text today).

use std::fmt;

/// A structured value produced by a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No output
    Unit,
    Bool(bool),
    Int(i64),
    /// Text, already formatted
    String(String),
    /// One item per line
    List(Vec<Value>),
    /// Ordered `key: value` pairs
    Record(Vec<(String, Value)>),
}

impl Value {
    /// Render the value as terminal text.
    pub fn to_text(&self) -> String {
        let mut buf = String::new();
        self.write_text(&mut buf);
        buf
    }

    fn write_text(&self, buf: &mut String) {
        match self {
            Value::Unit => {}
            Value::Bool(b) => buf.push_str(if *b { "true" } else { "false" }),
            Value::Int(n) => buf.push_str(&n.to_string()),
            Value::String(s) => buf.push_str(s),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        buf.push('\n');
                    }
                    item.write_text(buf);
                }
            }
            Value::Record(fields) => {
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        buf.push('\n');
                    }
                    buf.push_str(key);
                    buf.push_str(": ");
                    value.write_text(buf);
                }
            }
        }
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Unit,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::String(n.to_string()),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Record(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}
