// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

pub type AttributeKey = String;

/// Value of a free-form attribute attached to a pin, pad or pad ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// Free-form attributes, kept in insertion order.
pub type Attributes = IndexMap<AttributeKey, AttributeValue>;

impl AttributeValue {
    /// The text of a string attribute, `None` for any other kind.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::String(s) => f.write_str(s),
            AttributeValue::Int(v) => write!(f, "{v}"),
            AttributeValue::Float(v) => write!(f, "{v}"),
            AttributeValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::String(s)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_string())
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Float(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_from_plain_values() {
        assert_eq!(AttributeValue::from("7:0"), AttributeValue::String("7:0".to_string()));
        assert_eq!(AttributeValue::from(255_i64), AttributeValue::Int(255));
        assert_eq!(AttributeValue::from(1.5), AttributeValue::Float(1.5));
        assert_eq!(AttributeValue::from(true), AttributeValue::Bool(true));
    }

    #[test]
    fn only_strings_have_text() {
        assert_eq!(AttributeValue::from("low").as_str(), Some("low"));
        assert_eq!(AttributeValue::Int(4).as_str(), None);
        assert_eq!(AttributeValue::Int(4).to_string(), "4");
    }

    #[test]
    fn attributes_keep_insertion_order() {
        let mut attrs = Attributes::new();
        attrs.insert("resval".into(), 0_i64.into());
        attrs.insert("bits".into(), "3:0".into());
        let keys: Vec<_> = attrs.keys().cloned().collect();
        assert_eq!(keys, vec!["resval", "bits"]);
        assert_eq!(attrs["bits"].to_string(), "3:0");
    }
}
