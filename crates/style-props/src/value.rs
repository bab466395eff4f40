//! Prop values and prop sets
//!
//! A prop value is either a scalar or a responsive array. Arrays hold one
//! entry per breakpoint; `null` entries (here `None`) mean "keep the value
//! from the previous breakpoint".

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use theme::{ScaleValue, StyleValue};

/// A single style prop value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Same value at every breakpoint
    Scalar(ScaleValue),
    /// Per-breakpoint values
    Responsive(Vec<Option<ScaleValue>>),
}

impl PropValue {
    /// The scalar value, or the first entry of a responsive array
    pub fn first(&self) -> Option<&ScaleValue> {
        match self {
            PropValue::Scalar(v) => Some(v),
            PropValue::Responsive(values) => values.first().and_then(Option::as_ref),
        }
    }

    /// Convert a non-nested style value into a prop value
    pub fn from_style(value: &StyleValue) -> Option<Self> {
        match value {
            StyleValue::Value(v) => Some(PropValue::Scalar(v.clone())),
            StyleValue::Responsive(values) => Some(PropValue::Responsive(values.clone())),
            StyleValue::Nested(_) => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Scalar(value.into())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Scalar(value.into())
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Scalar(value.into())
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Scalar(value.into())
    }
}

impl From<ScaleValue> for PropValue {
    fn from(value: ScaleValue) -> Self {
        PropValue::Scalar(value)
    }
}

impl From<Vec<i32>> for PropValue {
    fn from(values: Vec<i32>) -> Self {
        PropValue::Responsive(values.into_iter().map(|v| Some(v.into())).collect())
    }
}

impl From<Vec<&str>> for PropValue {
    fn from(values: Vec<&str>) -> Self {
        PropValue::Responsive(values.into_iter().map(|v| Some(v.into())).collect())
    }
}

impl From<Vec<Option<ScaleValue>>> for PropValue {
    fn from(values: Vec<Option<ScaleValue>>) -> Self {
        PropValue::Responsive(values)
    }
}

/// An ordered set of props, keyed by prop name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props {
    values: IndexMap<String, PropValue>,
}

impl Props {
    /// Create an empty prop set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prop, returning the set (builder style)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a prop
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Get a prop
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.values.get(name)
    }

    /// Whether a prop is set
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Prop names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterate props in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of props
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no props are set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Shallow merge: every prop of `self` wins over the same prop in `defaults`
    pub fn over(&self, defaults: &Props) -> Props {
        let mut values = defaults.values.clone();
        for (name, value) in &self.values {
            values.insert(name.clone(), value.clone());
        }
        Props { values }
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Props {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
