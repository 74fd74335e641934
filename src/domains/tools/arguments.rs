//! Typed extraction of tool arguments.
//!
//! Tool calls arrive with an untyped JSON object. Handlers pull each
//! required parameter out through [`Arguments`], which checks presence and
//! JSON type and reports problems as an [`ArgumentError`] instead of
//! panicking.

use std::fmt;

use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// The semantic kind a parameter is expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    String,
    Number,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Number => f.write_str("number"),
        }
    }
}

/// A parameter value coerced to its expected kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArgValue<'a> {
    String(&'a str),
    Number(f64),
}

/// Errors raised while extracting arguments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgumentError {
    #[error("missing required parameter '{name}'")]
    Missing { name: String },

    #[error("parameter '{name}' must be a {expected}, got {found}")]
    WrongType {
        name: String,
        expected: ArgKind,
        found: &'static str,
    },

    #[error("unsupported {name} '{value}'")]
    UnknownVariant { name: String, value: String },
}

impl ArgumentError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }
}

/// Read-only view over the arguments of a single tool call.
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    map: &'a JsonObject,
}

impl<'a> Arguments<'a> {
    pub fn new(map: &'a JsonObject) -> Self {
        Self { map }
    }

    /// Extract a required parameter of the given kind.
    pub fn require(&self, name: &str, kind: ArgKind) -> Result<ArgValue<'a>, ArgumentError> {
        match kind {
            ArgKind::String => self.string(name).map(ArgValue::String),
            ArgKind::Number => self.number(name).map(ArgValue::Number),
        }
    }

    /// Extract a required string parameter.
    pub fn string(&self, name: &str) -> Result<&'a str, ArgumentError> {
        let value = self.present(name)?;
        value
            .as_str()
            .ok_or_else(|| wrong_type(name, ArgKind::String, value))
    }

    /// Extract a required number parameter. JSON integers are accepted.
    pub fn number(&self, name: &str) -> Result<f64, ArgumentError> {
        let value = self.present(name)?;
        value
            .as_f64()
            .ok_or_else(|| wrong_type(name, ArgKind::Number, value))
    }

    /// Extract a required string parameter restricted to the variants of `T`.
    ///
    /// `T` is deserialized from the raw string, so its serde renames define
    /// the accepted spellings.
    pub fn choice<T: DeserializeOwned>(&self, name: &str) -> Result<T, ArgumentError> {
        let raw = self.string(name)?;
        serde_json::from_value(Value::String(raw.to_string())).map_err(|_| {
            ArgumentError::UnknownVariant {
                name: name.to_string(),
                value: raw.to_string(),
            }
        })
    }

    fn present(&self, name: &str) -> Result<&'a Value, ArgumentError> {
        self.map
            .get(name)
            .filter(|v| !v.is_null())
            .ok_or_else(|| ArgumentError::missing(name))
    }
}

fn wrong_type(name: &str, expected: ArgKind, value: &Value) -> ArgumentError {
    ArgumentError::WrongType {
        name: name.to_string(),
        expected,
        found: json_type_name(value),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(rename_all = "lowercase")]
    enum Color {
        Red,
        Blue,
    }

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("test arguments must be an object"),
        }
    }

    #[test]
    fn test_extracts_string_and_number() {
        let map = object(json!({ "name": "foo", "x": 2, "y": 0.5 }));
        let args = Arguments::new(&map);
        assert_eq!(args.string("name"), Ok("foo"));
        assert_eq!(args.number("x"), Ok(2.0));
        assert_eq!(args.number("y"), Ok(0.5));
    }

    #[test]
    fn test_missing_parameter() {
        let map = object(json!({ "x": 1 }));
        let args = Arguments::new(&map);
        assert_eq!(args.number("y"), Err(ArgumentError::missing("y")));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let map = object(json!({ "name": null }));
        let args = Arguments::new(&map);
        assert_eq!(args.string("name"), Err(ArgumentError::missing("name")));
    }

    #[test]
    fn test_require_by_kind() {
        let map = object(json!({ "name": "foo", "x": 3 }));
        let args = Arguments::new(&map);
        assert_eq!(args.require("name", ArgKind::String), Ok(ArgValue::String("foo")));
        assert_eq!(args.require("x", ArgKind::Number), Ok(ArgValue::Number(3.0)));
        assert!(args.require("x", ArgKind::String).is_err());
    }

    #[test]
    fn test_wrong_type() {
        let map = object(json!({ "x": "2" }));
        let err = Arguments::new(&map).number("x").unwrap_err();
        assert_eq!(
            err,
            ArgumentError::WrongType {
                name: "x".into(),
                expected: ArgKind::Number,
                found: "string",
            }
        );
        assert_eq!(err.to_string(), "parameter 'x' must be a number, got string");
    }

    #[test]
    fn test_choice() {
        let map = object(json!({ "color": "blue", "warm": "red", "other": "green" }));
        let args = Arguments::new(&map);
        assert_eq!(args.choice::<Color>("color"), Ok(Color::Blue));
        assert_eq!(args.choice::<Color>("warm"), Ok(Color::Red));
        assert_eq!(
            args.choice::<Color>("other").unwrap_err().to_string(),
            "unsupported other 'green'"
        );
        assert!(args.choice::<Color>("absent").is_err());
    }
}
