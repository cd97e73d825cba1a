use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime value carried on a port during execution.
///
/// Ports carry either text or numbers; everything a circuit assembles
/// eventually stringifies through [`fmt::Display`]. Numbers with no
/// fractional part render without a decimal point (`42`, not `42.0`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PortValue {
    Number(f64),
    Text(String),
}

impl PortValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            PortValue::Text(_) => ValueType::Text,
            PortValue::Number(_) => ValueType::Number,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PortValue::Text(s) => Some(s),
            PortValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PortValue::Number(n) => Some(*n),
            PortValue::Text(_) => None,
        }
    }
}

impl fmt::Display for PortValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortValue::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            PortValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for PortValue {
    fn from(value: &str) -> Self {
        PortValue::Text(value.to_string())
    }
}

impl From<String> for PortValue {
    fn from(value: String) -> Self {
        PortValue::Text(value)
    }
}

impl From<f64> for PortValue {
    fn from(value: f64) -> Self {
        PortValue::Number(value)
    }
}

impl From<i64> for PortValue {
    fn from(value: i64) -> Self {
        PortValue::Number(value as f64)
    }
}

/// Declared type of a block output port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Text,
    Number,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Text => write!(f, "text"),
            ValueType::Number => write!(f, "number"),
        }
    }
}
