//! The [`RuleEntry`] view binds an operator and conditions to a settings payload.

use serde_json::{Map, Value};

use crate::condition::PropertySet;
use crate::operator::ConditionOperator;
use crate::{CONDITIONS_KEY, CONDITION_OPERATOR_KEY, SETTINGS_KEY};

/// One named rule entry, borrowed from a rule set.
///
/// Missing or mistyped `conditions` and `settings` read as empty.
#[derive(Debug, Clone)]
pub struct RuleEntry<'a> {
    /// Key of this entry in the rule set.
    pub name: &'a str,
    /// Normalized `conditionOperator`.
    pub operator: ConditionOperator,
    raw: &'a Map<String, Value>,
}

impl<'a> RuleEntry<'a> {
    /// View a raw entry; `None` if it is not an object.
    pub fn from_value(name: &'a str, value: &'a Value) -> Option<Self> {
        let raw = value.as_object()?;
        Some(Self {
            name,
            operator: ConditionOperator::from_value(raw.get(CONDITION_OPERATOR_KEY)),
            raw,
        })
    }

    /// The condition list, empty when absent or not an array.
    pub fn conditions(&self) -> &'a [Value] {
        match self.raw.get(CONDITIONS_KEY) {
            Some(Value::Array(conditions)) => conditions,
            _ => &[],
        }
    }

    /// The settings payload, `None` when absent or not an object.
    pub fn settings(&self) -> Option<&'a Map<String, Value>> {
        self.raw.get(SETTINGS_KEY).and_then(Value::as_object)
    }

    /// Raw `conditions` value, for diagnostics.
    pub fn raw_conditions(&self) -> Option<&'a Value> {
        self.raw.get(CONDITIONS_KEY)
    }

    /// Raw `settings` value, for diagnostics.
    pub fn raw_settings(&self) -> Option<&'a Value> {
        self.raw.get(SETTINGS_KEY)
    }

    /// Whether this entry applies to the given properties.
    pub fn is_satisfied(&self, properties: &PropertySet<'_>) -> bool {
        self.operator.evaluate(self.conditions(), properties)
    }
}
