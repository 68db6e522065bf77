// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use std::fmt::{self, Display};

/// A link attribute pair.
///
/// Attributes keep the order they were first set in, which is the order they
/// are rendered in.
///
/// ## Examples
///
/// ```
/// use linkrel::param::{ Param, Value };
///
/// let param = Param::new("title", "Next page");
///
/// assert_eq!(param.name(), "title");
/// assert_eq!(param.value(), &Value::Str("Next page".into()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    name: String,
    value: Value,
}

impl Param {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Param {
        Param {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the param and returns its value.
    pub fn into_value(self) -> Value {
        self.value
    }

    pub(crate) fn set_value(&mut self, value: Value) {
        self.value = value;
    }
}

/// An attribute value: text, a boolean, a number or a list of those.
///
/// The text form is what ends up in rendered HTML. Booleans follow the usual
/// HTML-templating convention of `1` for true and nothing for false, and
/// lists are joined with a single space.
///
/// ```
/// use linkrel::param::Value;
///
/// let value = Value::from(vec!["nofollow", "noopener"]);
///
/// assert_eq!(value.to_string(), "nofollow noopener".to_string());
/// ```
///
/// ```
/// use linkrel::param::Value;
///
/// assert_eq!(Value::from(true).to_string(), "1".to_string());
/// assert_eq!(Value::from(false).to_string(), "".to_string());
/// assert_eq!(Value::from(2.5).to_string(), "2.5".to_string());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    List(Vec<Value>),
}

impl Value {
    /// Returns the text of a `Str` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(value) => Some(value),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Value {
        Value::Int(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Value {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Float(n)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Value {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Str(val) => write!(formatter, "{}", val),
            Value::Bool(true) => write!(formatter, "1"),
            Value::Bool(false) => Ok(()),
            Value::Int(val) => write!(formatter, "{}", val),
            Value::Float(val) => write!(formatter, "{}", val),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(formatter, " ")?;
                    }
                    write!(formatter, "{}", item)?;
                }

                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_float() {
        assert_eq!(Value::from(3.0).to_string(), "3");
    }

    #[test]
    fn mixed_list() {
        let value = Value::List(vec![Value::from("a"), Value::from(1), Value::from(true)]);

        assert_eq!(value.to_string(), "a 1 1");
    }

    #[test]
    fn strict_number_equality() {
        assert_ne!(Value::from(1), Value::from(1.0));
    }

    #[test]
    fn as_str() {
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::from(1).as_str(), None);
    }

    #[test]
    fn overwrite_value() {
        let mut param = Param::new("title", "old");
        param.set_value("new".into());

        assert_eq!(param.into_value(), Value::from("new"));
    }
}
