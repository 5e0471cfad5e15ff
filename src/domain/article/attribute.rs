// src/domain/article/attribute.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Runtime type tag of an [`AttributeValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Integer,
    Float,
    Text,
    Boolean,
    Timestamp,
}

impl AttributeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKind::Integer => "int",
            AttributeKind::Float => "float",
            AttributeKind::Text => "str",
            AttributeKind::Boolean => "bool",
            AttributeKind::Timestamp => "datetime",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(AttributeKind::Integer),
            "float" => Ok(AttributeKind::Float),
            "str" => Ok(AttributeKind::Text),
            "bool" => Ok(AttributeKind::Boolean),
            "datetime" => Ok(AttributeKind::Timestamp),
            other => Err(DomainError::validation(format!(
                "unknown attribute kind '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum AttributeValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
}

impl AttributeValue {
    pub fn kind(&self) -> AttributeKind {
        match self {
            AttributeValue::Integer(_) => AttributeKind::Integer,
            AttributeValue::Float(_) => AttributeKind::Float,
            AttributeValue::Text(_) => AttributeKind::Text,
            AttributeValue::Boolean(_) => AttributeKind::Boolean,
            AttributeValue::Timestamp(_) => AttributeKind::Timestamp,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttributeValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Integer(value.into())
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Boolean(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_owned())
    }
}

impl From<DateTime<Utc>> for AttributeValue {
    fn from(value: DateTime<Utc>) -> Self {
        AttributeValue::Timestamp(value)
    }
}

/// A named slot that only accepts values of one declared kind.
///
/// A rejected assignment leaves the previously stored value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedAttribute {
    name: String,
    kind: AttributeKind,
    value: Option<AttributeValue>,
}

impl TypedAttribute {
    pub fn new(name: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            value: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    pub fn get(&self) -> Option<&AttributeValue> {
        self.value.as_ref()
    }

    pub fn set(&mut self, value: impl Into<AttributeValue>) -> DomainResult<()> {
        let value = value.into();
        let actual = value.kind();
        if actual != self.kind {
            tracing::debug!(
                attribute = %self.name,
                expected = %self.kind,
                actual = %actual,
                "rejected attribute assignment"
            );
            return Err(DomainError::TypeMismatch {
                expected: self.kind.as_str(),
                attribute: self.name.clone(),
                actual: actual.as_str(),
            });
        }
        self.value = Some(value);
        Ok(())
    }

    pub fn take(&mut self) -> Option<AttributeValue> {
        self.value.take()
    }
}
