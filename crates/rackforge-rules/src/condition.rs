//! Leaf conditions that evaluate against a [`PropertySet`].
//!
//! A condition is a flat object of `property -> expected value` pairs. It
//! matches when at least one pair equals the corresponding property, so a
//! multi-key condition is an implicit OR across its own keys.

use serde_json::{Map, Number, Value};

static NULL: Value = Value::Null;

/// Facts about one target machine, e.g. `{"mtm": "7X02", "model": "SR650"}`.
///
/// Anything that is not a JSON object is viewed as an empty property set.
/// Missing properties read as `null`.
#[derive(Debug, Clone, Copy)]
pub struct PropertySet<'a> {
    properties: Option<&'a Map<String, Value>>,
}

impl<'a> PropertySet<'a> {
    /// View a raw value as a property set.
    pub fn from_value(value: &'a Value) -> Self {
        Self {
            properties: value.as_object(),
        }
    }

    /// An empty property set.
    pub fn empty() -> Self {
        Self { properties: None }
    }

    /// Look up a property, reading missing ones as `null`.
    pub fn get(&self, name: &str) -> &'a Value {
        self.properties
            .and_then(|p| p.get(name))
            .unwrap_or(&NULL)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.map_or(true, |p| p.is_empty())
    }
}

impl<'a> From<&'a Map<String, Value>> for PropertySet<'a> {
    fn from(properties: &'a Map<String, Value>) -> Self {
        Self {
            properties: Some(properties),
        }
    }
}

/// Check whether a single condition matches the property set.
///
/// Non-object conditions and empty objects never match.
pub fn condition_matches(condition: &Value, properties: &PropertySet<'_>) -> bool {
    match condition.as_object() {
        Some(pairs) => pairs
            .iter()
            .any(|(name, expected)| values_equal(properties.get(name), expected)),
        None => false,
    }
}

/// Equality used for property comparison.
///
/// Numbers compare by value so `1` and `1.0` are equal, and a boolean is the
/// number 1 (`true`) or 0 (`false`). Everything else uses structural equality.
pub(crate) fn values_equal(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::Bool(flag), Value::Number(n)) | (Value::Number(n), Value::Bool(flag)) => {
            n.as_f64() == Some(if *flag { 1.0 } else { 0.0 })
        }
        _ => actual == expected,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if a.is_f64() || b.is_f64() {
        a.as_f64() == b.as_f64()
    } else {
        a == b
    }
}
