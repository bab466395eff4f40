//! Scalar token values
//!
//! Every scale entry and every leaf of an element style is either a number
//! or a string. Numbers that are whole serialize as JSON integers so the
//! exported theme keeps the same shape front-end consumers expect.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single token value
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleValue {
    /// Numeric value (pixels, weights, multipliers, scale indices)
    Number(f64),
    /// String value (colors, font stacks, lengths, token names)
    Str(String),
}

impl ScaleValue {
    /// Get the numeric value, if any
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ScaleValue::Number(n) => Some(*n),
            ScaleValue::Str(_) => None,
        }
    }

    /// Get the string value, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScaleValue::Number(_) => None,
            ScaleValue::Str(s) => Some(s),
        }
    }

    /// Interpret the value as a scale index (non-negative whole number)
    pub fn as_index(&self) -> Option<usize> {
        match self {
            ScaleValue::Number(n) if *n >= 0.0 && n.fract() == 0.0 => Some(*n as usize),
            _ => None,
        }
    }
}

/// Format a number the way CSS and JSON authors write it (`16`, `1.75`, `-4`)
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for ScaleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleValue::Number(n) => write!(f, "{}", format_number(*n)),
            ScaleValue::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for ScaleValue {
    fn from(value: &str) -> Self {
        ScaleValue::Str(value.to_string())
    }
}

impl From<String> for ScaleValue {
    fn from(value: String) -> Self {
        ScaleValue::Str(value)
    }
}

impl From<i32> for ScaleValue {
    fn from(value: i32) -> Self {
        ScaleValue::Number(f64::from(value))
    }
}

impl From<f64> for ScaleValue {
    fn from(value: f64) -> Self {
        ScaleValue::Number(value)
    }
}

impl Serialize for ScaleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ScaleValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                serializer.serialize_i64(*n as i64)
            }
            ScaleValue::Number(n) => serializer.serialize_f64(*n),
            ScaleValue::Str(s) => serializer.serialize_str(s),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Str(String),
}

impl<'de> Deserialize<'de> for ScaleValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawValue::deserialize(deserializer)? {
            RawValue::Number(n) => ScaleValue::Number(n),
            RawValue::Str(s) => ScaleValue::Str(s),
        })
    }
}
